// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;
pub mod store;

pub use crate::core::context::ContextWindow;
pub use crate::core::engine::HistoryEngine;
pub use crate::core::frequency::FrequencyPolicy;
pub use crate::core::types::{
    Frequency, Timestamp, UpdateOperation, HIGH_FREQUENCY, LOW_FREQUENCY, MAX_WORD_LENGTH,
};
pub use crate::learning::{LearningEngine, TypingEvent};
pub use crate::store::{DictionaryStore, UserHistoryStore};
