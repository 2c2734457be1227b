//! Runtime configuration for the task list manager.
//!
//! # Invariants
//! - A validated config always has a non-blank storage key.
//! - `log_level` is one of the levels accepted by `init_logging`.

use crate::logging::{default_log_level, init_logging, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key the task list is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyStorageKey,
    UnsupportedLogLevel(String),
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStorageKey => write!(f, "storage key cannot be empty"),
            Self::UnsupportedLogLevel(message) | Self::Logging(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

/// Settings for one task list manager instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListConfig {
    /// Key the whole task list is stored under.
    pub storage_key: String,
    /// Log level applied by `init_logging`.
    pub log_level: String,
    /// Absolute directory for rolling log files; logging stays off when `None`.
    pub log_dir: Option<String>,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl TaskListConfig {
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_logging(mut self, level: impl Into<String>, log_dir: impl Into<String>) -> Self {
        self.log_level = level.into();
        self.log_dir = Some(log_dir.into());
        self
    }

    /// Checks the config without side effects.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        normalize_level(&self.log_level).map_err(ConfigError::UnsupportedLogLevel)?;
        Ok(())
    }

    /// Starts file logging when `log_dir` is set.
    pub fn init_logging(&self) -> ConfigResult<()> {
        self.validate()?;
        match self.log_dir.as_deref() {
            Some(log_dir) => {
                init_logging(&self.log_level, log_dir).map_err(ConfigError::Logging)
            }
            None => Ok(()),
        }
    }
}
