//! Crate configuration.
//!
//! Everything tunable about the sample screens lives here: how many
//! placeholder tasks to generate, their label prefix, and the counter's
//! daily limit. Loaded from a TOML file when one exists, otherwise the
//! compiled-in defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    ValidationError { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub counter: CounterConfig,
}

/// Placeholder task generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Number of tasks a fresh session is seeded with (default: 30).
    #[serde(default = "default_task_count")]
    pub count: u32,
    /// Label prefix; the task's sequence number is appended.
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
}

/// Water counter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Glasses per day before the add button is disabled (default: 10).
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            count: default_task_count(),
            label_prefix: default_label_prefix(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            daily_limit: default_daily_limit(),
        }
    }
}

fn default_task_count() -> u32 {
    30
}

fn default_label_prefix() -> String {
    "Task #".to_string()
}

fn default_daily_limit() -> u32 {
    10
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one task is generated (a session observes a populated list)
    /// - The counter limit allows at least one glass
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks.count == 0 {
            return Err(ConfigError::ValidationError {
                message: "tasks.count must be at least 1".to_string(),
            });
        }

        if self.counter.daily_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "counter.daily_limit must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
