//! The configuration struct and its defaults.

use crate::format::LogFormat;
use crate::sink::Sink;

/// Everything needed to build a [`LogContext`](crate::LogContext).
///
/// Level names are kept as raw strings so that a bad value degrades to the
/// default at init time instead of failing the configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output destination (default: standard error)
    pub sink: Sink,
    /// Minimum severity name, case-insensitive (default: DEBUG)
    pub min_level: Option<String>,
    /// Optional allow-list of severity names
    pub levels: Option<Vec<String>>,
    /// Output layout (default: plain)
    pub format: LogFormat,
    /// Force the human-friendly console layout regardless of `format`
    pub human_friendly: bool,
    /// Prefix records with a timestamp (default: true)
    pub timestamps: bool,
    /// Colour output; `None` means colour only when the sink is a terminal
    pub ansi: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: Sink::default(),
            min_level: None,
            levels: None,
            format: LogFormat::default(),
            human_friendly: false,
            timestamps: true,
            ansi: None,
        }
    }
}

impl LogConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output destination.
    pub fn with_sink(mut self, sink: impl Into<Sink>) -> Self {
        self.sink = sink.into();
        self
    }

    /// Set the minimum severity by name. Unknown names fall back to DEBUG
    /// with a warning when the configuration is applied.
    pub fn with_min_level(mut self, level: impl Into<String>) -> Self {
        self.min_level = Some(level.into());
        self
    }

    /// Restrict output to the named severities.
    pub fn with_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = Some(levels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the output layout.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Force the console layout.
    pub fn with_human_friendly(mut self, human_friendly: bool) -> Self {
        self.human_friendly = human_friendly;
        self
    }

    /// Enable or disable the timestamp prefix.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Force colour output on or off.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Layout actually used, after `human_friendly` is applied.
    pub fn effective_format(&self) -> LogFormat {
        if self.human_friendly {
            LogFormat::Console
        } else {
            self.format
        }
    }

    /// Whether output is coloured, after terminal auto-detection.
    pub fn effective_ansi(&self) -> bool {
        self.ansi.unwrap_or_else(|| self.sink.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert!(matches!(config.sink, Sink::Stderr));
        assert!(config.min_level.is_none());
        assert!(config.levels.is_none());
        assert_eq!(config.format, LogFormat::Plain);
        assert!(!config.human_friendly);
        assert!(config.timestamps);
        assert!(config.ansi.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = LogConfig::new()
            .with_sink(MemorySink::new())
            .with_min_level("warn")
            .with_levels(["warn", "error"])
            .with_format(LogFormat::Json)
            .with_timestamps(false)
            .with_ansi(true);

        assert!(matches!(config.sink, Sink::Writer(_)));
        assert_eq!(config.min_level.as_deref(), Some("warn"));
        assert_eq!(config.levels, Some(vec!["warn".to_string(), "error".to_string()]));
        assert_eq!(config.effective_format(), LogFormat::Json);
        assert!(!config.timestamps);
        assert!(config.effective_ansi());
    }

    #[test]
    fn test_human_friendly_overrides_format() {
        let config = LogConfig::default()
            .with_format(LogFormat::Json)
            .with_human_friendly(true);
        assert_eq!(config.effective_format(), LogFormat::Console);
    }

    #[test]
    fn test_ansi_auto_is_off_for_memory_sink() {
        let config = LogConfig::default().with_sink(MemorySink::new());
        assert!(!config.effective_ansi());
    }
}
