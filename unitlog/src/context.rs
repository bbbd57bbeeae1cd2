//! Configured logging backends.
//!
//! A [`LogContext`] is one applied [`LogConfig`]: a severity filter, a layout
//! and the sink's `tracing-subscriber` writer.
//!
//! - Records below the filter are dropped before any formatting
//! - Message arguments are evaluated before the sink is touched, so they may
//!   themselves log through any context
//! - Passing records are written synchronously on the caller's thread
//! - Write failures are ignored
//! - The application's own `tracing` dispatcher is never touched

use std::fmt::{self, Arguments};
use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogConfig;
use crate::filter::LevelFilter;
use crate::format::{LogFormat, LogRecord};
use crate::log::{NamedLogger, Severity};
use crate::sink::Sink;

/// Unit name used for the façade's own records.
pub(crate) const INTERNAL_UNIT: &str = "unitlog";

/// An applied logging configuration.
///
/// Cheap to clone; clones share the filter and the sink.
#[derive(Debug, Clone)]
pub struct LogContext {
    inner: Arc<Inner>,
}

struct Inner {
    filter: LevelFilter,
    format: LogFormat,
    timestamps: bool,
    ansi: bool,
    writer: BoxMakeWriter,
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inner")
            .field("filter", &self.filter)
            .field("format", &self.format)
            .field("timestamps", &self.timestamps)
            .field("ansi", &self.ansi)
            .finish_non_exhaustive()
    }
}

impl LogContext {
    /// Apply a configuration.
    ///
    /// Never fails. Problems with the configuration (unknown level names, a
    /// file sink that cannot be opened) are written as WARN records to the
    /// resulting context and replaced by defaults.
    pub fn new(config: LogConfig) -> Self {
        let (context, warnings) = Self::build(&config);
        context.report(&warnings);
        context
    }

    /// Apply a configuration, returning the problems instead of logging them.
    pub(crate) fn build(config: &LogConfig) -> (Self, Vec<String>) {
        let (filter, mut warnings) =
            LevelFilter::from_config(config.min_level.as_deref(), config.levels.as_deref());

        let (writer, ansi) = match config.sink.make_writer() {
            Ok(writer) => (writer, config.effective_ansi()),
            Err(e) => {
                warnings.push(format!(
                    "cannot open log sink {:?}: {}; falling back to stderr",
                    config.sink, e
                ));
                let ansi = config.ansi.unwrap_or_else(|| Sink::Stderr.is_terminal());
                (BoxMakeWriter::new(std::io::stderr), ansi)
            }
        };

        let format = config.effective_format();
        tracing::debug!(
            min_level = %filter.min(),
            format = %format,
            sink = ?config.sink,
            "logging context configured"
        );

        let context = Self {
            inner: Arc::new(Inner {
                filter,
                format,
                timestamps: config.timestamps,
                ansi,
                writer,
            }),
        };
        (context, warnings)
    }

    /// Write each configuration problem as a WARN record.
    ///
    /// These bypass the filter: a configuration that hides WARN must still
    /// say what was wrong with it.
    pub(crate) fn report(&self, warnings: &[String]) {
        for warning in warnings {
            self.emit(Severity::Warn, INTERNAL_UNIT, warning.clone());
        }
    }

    /// Create a logger tagged with `unit` that writes through this context.
    pub fn logger(&self, unit: &str) -> NamedLogger {
        NamedLogger::bound(unit, self.clone())
    }

    /// The severity filter applied to every write.
    pub fn filter(&self) -> &LevelFilter {
        &self.inner.filter
    }

    /// Layout of written records.
    pub fn format(&self) -> LogFormat {
        self.inner.format
    }

    /// Filter, format and write one record. Records that do not pass the
    /// filter are dropped silently.
    pub fn write(&self, severity: Severity, unit: &str, args: Arguments<'_>) {
        if !self.inner.filter.allows(severity) {
            return;
        }
        // Arguments may log on their own; evaluate them before any writer is held.
        let message = args.to_string();
        self.emit(severity, unit, message);
    }

    fn emit(&self, severity: Severity, unit: &str, message: String) {
        let record = LogRecord {
            severity,
            unit: unit.to_string(),
            message,
            time: Utc::now(),
        };
        let mut line = record.render(self.inner.format, self.inner.timestamps, self.inner.ansi);
        line.push('\n');

        // Fire-and-forget: sink failures never reach the caller.
        let _ = self.inner.writer.make_writer().write_all(line.as_bytes());
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}
