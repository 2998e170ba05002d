//! TOML configuration for `prodcalc`.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [history]
//! capacity = 100        # omit for unbounded
//! recent = 5
//!
//! [session]
//! record_calculations = true
//!
//! [logging]
//! level = "info"
//! file = "prodcalc.log"
//! ```

use std::path::{Path, PathBuf};

use productivity_core::{DEFAULT_RECENT, HistoryError, RetentionPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("history.capacity must be at least 1")]
    ZeroCapacity,

    #[error("history.recent must be at least 1")]
    ZeroRecent,
}

impl From<HistoryError> for ConfigError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::ZeroCapacity => Self::ZeroCapacity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Maximum records kept per session; `None` keeps everything.
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Number of entries the `recent` command shows by default.
    #[serde(default = "default_recent")]
    pub recent: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Whether a successful `calc` in the REPL is appended to the history.
    #[serde(default = "default_true")]
    pub record_calculations: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Bare level or any `EnvFilter` directive.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_recent() -> usize {
    DEFAULT_RECENT
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            recent: default_recent(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_calculations: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(
        content: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.history.recent == 0 {
            return Err(ConfigError::ZeroRecent);
        }
        Ok(())
    }

    pub fn retention_policy(&self) -> Result<RetentionPolicy, ConfigError> {
        Ok(RetentionPolicy::from_capacity(self.history.capacity)?)
    }

    /// Applies command-line flags, which take precedence over the file.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if let Some(file) = log_file {
            self.logging.file = Some(file);
        }
        self
    }
}
