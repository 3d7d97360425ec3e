use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::types::{Frequency, HIGH_FREQUENCY, LOW_FREQUENCY};
use crate::error::ConfigError;
use crate::learning::DEFAULT_MODEL_ORDER;

const APP_DIR: &str = "user-history-ime";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct HistoryConfig {
    #[serde(default)]
    pub learning: LearningConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl HistoryConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&resolve_config_path())
    }

    /// Reads `path`, or returns defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let parsed: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.learning.model_order == 0 {
            return Err(ConfigError::Validation("learning.model_order must be >= 1".into()));
        }
        if self.learning.untrusted_frequency > self.learning.trusted_frequency {
            return Err(ConfigError::Validation(
                "learning.untrusted_frequency must not exceed trusted_frequency".into(),
            ));
        }
        Ok(())
    }
}

fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var("USER_HISTORY_IME_CONFIG") {
        return PathBuf::from(path);
    }

    if let Some(base) = dirs::config_dir() {
        return base.join(APP_DIR).join("config.toml");
    }

    env::temp_dir().join("user-history-ime.toml")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LearningConfig {
    #[serde(default = "default_model_order")]
    pub model_order: usize,
    #[serde(default = "default_trusted_frequency")]
    pub trusted_frequency: Frequency,
    #[serde(default = "default_untrusted_frequency")]
    pub untrusted_frequency: Frequency,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            model_order: default_model_order(),
            trusted_frequency: default_trusted_frequency(),
            untrusted_frequency: default_untrusted_frequency(),
        }
    }
}

fn default_model_order() -> usize {
    DEFAULT_MODEL_ORDER
}

fn default_trusted_frequency() -> Frequency {
    HIGH_FREQUENCY
}

fn default_untrusted_frequency() -> Frequency {
    LOW_FREQUENCY
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Where the user history snapshot lives. `None` keeps it in memory only.
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dictionary_path: default_dictionary_path() }
    }
}

fn default_dictionary_path() -> Option<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join(APP_DIR).join("user_history.bin"))
}
