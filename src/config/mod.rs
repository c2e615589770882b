//! Configuration management for `issue_tracker`.
//!
//! Configuration is resolved from, lowest precedence first:
//! - Built-in defaults
//! - A YAML file (e.g. `issue-tracker.yaml`)
//! - Environment variable overrides (`ISSUE_TRACKER_*`)

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::query::SortOrder;

/// Overrides `log.level`.
pub const ENV_LOG_LEVEL: &str = "ISSUE_TRACKER_LOG";
/// Overrides `log.format`.
pub const ENV_LOG_FORMAT: &str = "ISSUE_TRACKER_LOG_FORMAT";
/// Overrides `list.default_sort`.
pub const ENV_SORT: &str = "ISSUE_TRACKER_SORT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TrackerError::InvalidLogFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `issue_core=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Listing settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Order used when a caller does not ask for one.
    pub default_sort: SortOrder,
}

/// Top-level tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub log: LogConfig,
    pub list: ListConfig,
}

impl TrackerConfig {
    /// Parse configuration from YAML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the YAML is malformed or has unknown values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| TrackerError::config(e.to_string()))
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the file does not exist, `Io` if it cannot
    /// be read, or `ConfigParse` if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TrackerError::FileNotFound(path.to_path_buf())
            } else {
                TrackerError::Io(e)
            }
        })?;

        Self::from_yaml_str(&contents).map_err(|e| match e {
            TrackerError::Config(reason) => TrackerError::ConfigParse {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Load from `path` when given, otherwise start from defaults.
    /// Environment overrides are applied in both cases.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`load`](Self::load) and
    /// [`apply_env_overrides`](Self::apply_env_overrides).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `ISSUE_TRACKER_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override holds an invalid value.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLogFormat` or `InvalidSortOrder` for unparseable values.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.log.level = level.trim().to_string();
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            self.log.format = format.parse()?;
        }
        if let Some(sort) = get(ENV_SORT) {
            self.list.default_sort = sort.parse()?;
        }

        tracing::debug!(
            level = %self.log.level,
            format = %self.log.format,
            sort = %self.list.default_sort,
            "resolved configuration"
        );
        Ok(())
    }
}
