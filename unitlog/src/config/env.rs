//! Environment variable overlay.

use std::path::PathBuf;

use super::file::ConfigError;
use super::parser::parse_list;
use super::settings::LogConfig;
use crate::sink::Sink;

/// Minimum severity name.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Comma separated allow-list of severity names.
pub const ENV_LOG_LEVELS: &str = "LOG_LEVELS";
/// Output layout: plain, json or console.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Log file path; selects a file sink.
pub const ENV_LOG_FILE: &str = "LOG_FILE";

impl LogConfig {
    /// Defaults overlaid with the `LOG_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Overlay the `LOG_*` environment variables on this configuration.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup, keyed like the environment.
    ///
    /// Blank values count as unset.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.min_level = Some(level.trim().to_string());
        }
        if let Some(levels) = get(ENV_LOG_LEVELS) {
            self.levels = parse_list(&levels);
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            self.format = format.parse().map_err(|_| ConfigError::InvalidValue {
                section: "env".to_string(),
                key: ENV_LOG_FORMAT.to_string(),
                value: format.clone(),
                reason: "must be one of: plain, json, console".to_string(),
            })?;
        }
        if let Some(file) = get(ENV_LOG_FILE) {
            self.sink = Sink::File(PathBuf::from(file.trim()));
        }

        Ok(self)
    }
}
