//! Runtime configuration for binaries embedding the rental core.
//!
//! # Responsibility
//! - Resolve database path and logging settings from the environment.
//! - Keep lookup injectable so callers and tests control the source.
//!
//! # Invariants
//! - Blank values count as unset.
//! - `log_level` is always a normalized level name.

use crate::helper::is_null_or_empty;
use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "RENTAL_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "RENTAL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "RENTAL_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "rental.sqlite3";

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// Absolute log directory. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

/// Configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

impl CoreConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_blank(lookup(ENV_DB_PATH)) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(level) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = normalize_level(&level).map_err(|err| ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: level.clone(),
                reason: err.to_string(),
            })?;
        }

        if let Some(dir) = non_blank(lookup(ENV_LOG_DIR)) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: dir,
                    reason: "must be an absolute path".to_string(),
                });
            }
            config.log_dir = Some(path);
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    if is_null_or_empty(value.as_deref()) {
        return None;
    }
    value
}
