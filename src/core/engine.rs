use crate::config::HistoryConfig;
use crate::error::StoreError;
use crate::learning::{LearningEngine, TypingEvent};
use crate::persistence::{load_from_disk, save_to_disk};
use crate::store::UserHistoryStore;
use std::path::{Path, PathBuf};

// The user history engine: learning policy plus the store it feeds.
pub struct HistoryEngine {
    pub store: UserHistoryStore,
    learning_engine: LearningEngine,
    dictionary_path: Option<PathBuf>,
}

impl HistoryEngine {
    pub fn new() -> Self {
        Self::with_learning(LearningEngine::new())
    }

    pub fn with_learning(learning_engine: LearningEngine) -> Self {
        Self {
            store: UserHistoryStore::new(),
            learning_engine,
            dictionary_path: None,
        }
    }

    /// Loads the snapshot named by `config`, or starts empty if there is none
    /// or it can't be read.
    pub fn from_config(config: &HistoryConfig) -> Self {
        let mut engine = Self::with_learning(LearningEngine::from_config(&config.learning));
        if let Some(path) = &config.storage.dictionary_path {
            engine.store = load_or_empty(path);
            engine.dictionary_path = Some(path.clone());
        }
        engine
    }

    pub fn from_file_or_new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut engine = Self::new();
        engine.store = load_or_empty(&path);
        engine.dictionary_path = Some(path);
        engine
    }

    pub fn learning_engine(&self) -> &LearningEngine {
        &self.learning_engine
    }

    /// Learns from a committed word. Best-effort: store failures are logged,
    /// never returned, so typing is not interrupted. Returns the number of
    /// updates applied.
    pub fn record(&mut self, event: &TypingEvent) -> usize {
        match self.learning_engine.learn(&mut self.store, event) {
            Ok(applied) => applied,
            Err(e) => {
                tracing::warn!(error = %e, "failed to update user history");
                0
            }
        }
    }

    pub fn save_dictionary(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.dictionary_path {
            save_to_disk(&self.store, path)
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn load_or_empty(path: &Path) -> UserHistoryStore {
    if !path.exists() {
        return UserHistoryStore::new();
    }
    load_from_disk(path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load user history, starting empty");
        UserHistoryStore::new()
    })
}
