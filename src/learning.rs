// File: src/learning.rs
use crate::config::LearningConfig;
use crate::core::context::ContextWindow;
use crate::core::frequency::FrequencyPolicy;
use crate::core::types::{is_storable, Timestamp, UpdateOperation};
use crate::error::StoreError;
use crate::store::DictionaryStore;
use serde::{Deserialize, Serialize};

/// Widest n-gram the user history stores: bigrams.
pub const DEFAULT_MODEL_ORDER: usize = 2;

/// One committed word together with what preceded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingEvent {
    #[serde(default)]
    pub context: ContextWindow,
    pub word: String,
    /// Whether the word is already known to be valid vocabulary.
    #[serde(default)]
    pub trusted: bool,
    pub timestamp: Timestamp,
}

/// Turns typing events into dictionary updates.
///
/// Holds no state besides its policy, so one instance can serve any number
/// of typing sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningEngine {
    model_order: usize,
    policy: FrequencyPolicy,
}

impl LearningEngine {
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_MODEL_ORDER, FrequencyPolicy::default())
    }

    /// `model_order` below 1 is treated as 1 (unigrams only).
    pub fn with_policy(model_order: usize, policy: FrequencyPolicy) -> Self {
        Self { model_order: model_order.max(1), policy }
    }

    pub fn from_config(config: &LearningConfig) -> Self {
        Self::with_policy(
            config.model_order,
            FrequencyPolicy::new(config.trusted_frequency, config.untrusted_frequency),
        )
    }

    pub fn model_order(&self) -> usize {
        self.model_order
    }

    pub fn policy(&self) -> FrequencyPolicy {
        self.policy
    }

    /// Decides which updates a committed word produces.
    ///
    /// The unigram update always comes first. N-gram updates follow from the
    /// narrowest context to the widest; the first unusable predictor ends them.
    /// Malformed input yields fewer updates, never an error.
    pub fn ingest(
        &self,
        context: &ContextWindow,
        word: &str,
        trusted: bool,
        timestamp: Timestamp,
    ) -> Vec<UpdateOperation> {
        if !is_storable(word) {
            tracing::trace!(chars = word.chars().count(), "word too long, skipping event");
            return Vec::new();
        }

        let frequency = self.policy.frequency_for(trusted);
        let mut ops = vec![UpdateOperation::Unigram {
            word: word.to_string(),
            frequency,
            timestamp,
        }];

        let trimmed = context.trim(self.model_order - 1);
        for i in 0..trimmed.len() {
            // The slice for `i` widens the one for `i - 1` by the word at `i`.
            let prev_word = match trimmed.word(i) {
                Ok(prev) if is_storable(prev) => prev,
                _ => {
                    tracing::trace!(position = i, "unusable context word, stopping n-grams");
                    break;
                }
            };
            // Never record a word as its own predictor.
            if i == 0 && prev_word == word {
                tracing::trace!(word, "self-referencing bigram suppressed");
                break;
            }

            let frequency = if context.is_sentence_start() {
                self.policy.low()
            } else {
                frequency
            };
            ops.push(UpdateOperation::Ngram {
                context: trimmed.trim(i + 1),
                word: word.to_string(),
                frequency,
                timestamp,
            });
        }

        ops
    }

    /// Ingests `event` and applies the resulting updates to `store` in order.
    /// Returns how many updates were applied.
    pub fn learn<S>(&self, store: &mut S, event: &TypingEvent) -> Result<usize, StoreError>
    where
        S: DictionaryStore + ?Sized,
    {
        let ops = self.ingest(&event.context, &event.word, event.trusted, event.timestamp);
        for op in &ops {
            store.apply(op)?;
        }
        tracing::debug!(applied = ops.len(), "typing event learned");
        Ok(ops.len())
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}
