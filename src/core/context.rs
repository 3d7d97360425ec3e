// File: src/core/context.rs
use crate::error::ContextError;
use serde::{Deserialize, Serialize};

/// The words that preceded the word being committed, most recent first.
///
/// A window flagged as sentence start carries no genuine preceding words;
/// anything it holds is structural. Windows are immutable: `trim` returns a
/// new window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextWindow {
    words: Vec<String>,
    is_sentence_start: bool,
}

impl ContextWindow {
    pub fn new<I, S>(words: I, is_sentence_start: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            is_sentence_start,
        }
    }

    /// No known context.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The beginning of the input, with no preceding words.
    pub fn beginning_of_sentence() -> Self {
        Self { words: Vec::new(), is_sentence_start: true }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words, false)
    }

    pub fn is_sentence_start(&self) -> bool {
        self.is_sentence_start
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `position`, where 0 is the most recent.
    pub fn word(&self, position: usize) -> Result<&str, ContextError> {
        self.words
            .get(position)
            .map(String::as_str)
            .ok_or(ContextError::OutOfRange { position, len: self.words.len() })
    }

    /// All words, most recent first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// A new window holding at most the `k` most recent words.
    /// O(k) complexity; never fails when `k` exceeds the current length.
    pub fn trim(&self, k: usize) -> Self {
        Self {
            words: self.words.iter().take(k).cloned().collect(),
            is_sentence_start: self.is_sentence_start,
        }
    }
}
