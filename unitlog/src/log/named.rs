//! Unit-tagged logger.

use std::fmt::Arguments;
use std::sync::Arc;

use crate::context::LogContext;
use crate::log::{Logger, Severity};

/// Where a [`NamedLogger`] sends its records.
#[derive(Debug, Clone)]
enum Target {
    /// A specific context, fixed at creation
    Context(LogContext),
    /// Whatever [`init`](crate::init) last installed, looked up per write
    Global,
}

/// Logger that tags every record with a unit name.
///
/// Cheap to clone and create per component. It owns no I/O resources.
///
/// ```
/// use unitlog::{LogConfig, LogContext, MemorySink};
/// use unitlog::log::Logger;
///
/// let sink = MemorySink::new();
/// let context = LogContext::new(
///     LogConfig::default()
///         .with_sink(sink.clone())
///         .with_min_level("warn")
///         .with_timestamps(false),
/// );
///
/// let db = context.logger("db");
/// db.debug("connecting");
/// db.warn("slow query");
/// assert_eq!(sink.lines(), vec!["[WARN] db: slow query"]);
/// ```
#[derive(Debug, Clone)]
pub struct NamedLogger {
    unit: Arc<str>,
    target: Target,
}

impl NamedLogger {
    pub(crate) fn bound(unit: &str, context: LogContext) -> Self {
        Self {
            unit: Arc::from(unit),
            target: Target::Context(context),
        }
    }

    pub(crate) fn global(unit: &str) -> Self {
        Self {
            unit: Arc::from(unit),
            target: Target::Global,
        }
    }

    /// Unit name attached to every record.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether the logger follows the process-wide configuration.
    pub fn is_global(&self) -> bool {
        matches!(self.target, Target::Global)
    }
}

impl Logger for NamedLogger {
    fn log(&self, severity: Severity, args: Arguments<'_>) {
        match &self.target {
            Target::Context(context) => context.write(severity, &self.unit, args),
            Target::Global => crate::global::current().write(severity, &self.unit, args),
        }
    }

    fn enabled(&self, severity: Severity) -> bool {
        match &self.target {
            Target::Context(context) => context.filter().allows(severity),
            Target::Global => crate::global::current().filter().allows(severity),
        }
    }
}
