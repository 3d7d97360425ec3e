//! Error types for the user history.
//!
//! Ingestion itself never fails; these cover the pieces around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context position {position} out of range (window holds {len} words)")]
    OutOfRange { position: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("word exceeds {max} characters")]
    WordTooLong { max: usize },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode dictionary: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode dictionary {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse config {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    Validation(String),
}
