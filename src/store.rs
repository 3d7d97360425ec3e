// File: src/store.rs
use crate::core::context::ContextWindow;
use crate::core::types::{is_storable, Frequency, Timestamp, UpdateOperation, MAX_WORD_LENGTH};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where update operations end up. Implementations own merging, persistence,
/// decay and eviction; the learning engine only hands operations over.
pub trait DictionaryStore {
    fn apply_unigram(
        &mut self,
        word: &str,
        frequency: Frequency,
        timestamp: Timestamp,
    ) -> Result<(), StoreError>;

    fn apply_ngram(
        &mut self,
        context: &ContextWindow,
        word: &str,
        frequency: Frequency,
        timestamp: Timestamp,
    ) -> Result<(), StoreError>;

    fn apply(&mut self, op: &UpdateOperation) -> Result<(), StoreError> {
        match op {
            UpdateOperation::Unigram { word, frequency, timestamp } => {
                self.apply_unigram(word, *frequency, *timestamp)
            }
            UpdateOperation::Ngram { context, word, frequency, timestamp } => {
                self.apply_ngram(context, word, *frequency, *timestamp)
            }
        }
    }
}

/// What the store knows about one unigram or n-gram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Highest frequency ever recorded for the entry.
    pub frequency: Frequency,
    /// Number of observations merged into the entry.
    pub count: u32,
    pub last_updated: Timestamp,
}

impl HistoryEntry {
    fn first(frequency: Frequency, timestamp: Timestamp) -> Self {
        Self { frequency, count: 1, last_updated: timestamp }
    }

    fn merge(&mut self, frequency: Frequency, timestamp: Timestamp) {
        self.frequency = self.frequency.max(frequency);
        self.count = self.count.saturating_add(1);
        self.last_updated = self.last_updated.max(timestamp);
    }
}

/// In-memory user history: unigram and n-gram tables with merge-on-write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserHistoryStore {
    unigrams: HashMap<String, HistoryEntry>,
    /// Maps (context, word) -> entry
    ngrams: HashMap<(ContextWindow, String), HistoryEntry>,
}

impl UserHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unigram(&self, word: &str) -> Option<&HistoryEntry> {
        self.unigrams.get(word)
    }

    pub fn ngram(&self, context: &ContextWindow, word: &str) -> Option<&HistoryEntry> {
        // Tuple keys can't be borrowed piecewise, so build an owned one.
        self.ngrams.get(&(context.clone(), word.to_string()))
    }

    pub fn unigram_count(&self) -> usize {
        self.unigrams.len()
    }

    pub fn ngram_count(&self) -> usize {
        self.ngrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty() && self.ngrams.is_empty()
    }
}

fn check_word(word: &str) -> Result<(), StoreError> {
    if is_storable(word) {
        Ok(())
    } else {
        Err(StoreError::WordTooLong { max: MAX_WORD_LENGTH })
    }
}

impl DictionaryStore for UserHistoryStore {
    fn apply_unigram(
        &mut self,
        word: &str,
        frequency: Frequency,
        timestamp: Timestamp,
    ) -> Result<(), StoreError> {
        check_word(word)?;
        self.unigrams
            .entry(word.to_string())
            .and_modify(|e| e.merge(frequency, timestamp))
            .or_insert_with(|| HistoryEntry::first(frequency, timestamp));
        Ok(())
    }

    fn apply_ngram(
        &mut self,
        context: &ContextWindow,
        word: &str,
        frequency: Frequency,
        timestamp: Timestamp,
    ) -> Result<(), StoreError> {
        check_word(word)?;
        for prev in context.words() {
            check_word(prev)?;
        }
        self.ngrams
            .entry((context.clone(), word.to_string()))
            .and_modify(|e| e.merge(frequency, timestamp))
            .or_insert_with(|| HistoryEntry::first(frequency, timestamp));
        Ok(())
    }
}
