// src/core/types.rs
use crate::core::context::ContextWindow;
use serde::{Deserialize, Serialize};

/// Frequency recorded for a history entry, in the units of the binary dictionary.
pub type Frequency = i32;

/// Caller-supplied, epoch-like time of a typing event. Passed through untouched.
pub type Timestamp = u64;

/// Longest word (in characters) the user history will ever store.
pub const MAX_WORD_LENGTH: usize = 48;

/// Frequency for words already present in a dictionary.
pub const HIGH_FREQUENCY: Frequency = 2;

/// Frequency for words not present in any dictionary.
/// Matches the "not a probability" sentinel of the dictionary format.
pub const LOW_FREQUENCY: Frequency = -1;

/// Returns true when `word` fits in the dictionary.
pub fn is_storable(word: &str) -> bool {
    word.chars().count() <= MAX_WORD_LENGTH
}

/// A single request to the dictionary store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOperation {
    Unigram {
        word: String,
        frequency: Frequency,
        timestamp: Timestamp,
    },
    Ngram {
        /// Preceding words, newest-first, at most `model_order - 1` of them.
        context: ContextWindow,
        word: String,
        frequency: Frequency,
        timestamp: Timestamp,
    },
}

impl UpdateOperation {
    pub fn word(&self) -> &str {
        match self {
            Self::Unigram { word, .. } | Self::Ngram { word, .. } => word,
        }
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            Self::Unigram { frequency, .. } | Self::Ngram { frequency, .. } => *frequency,
        }
    }

    pub fn is_ngram(&self) -> bool {
        matches!(self, Self::Ngram { .. })
    }
}
