//! Adapter onto the application's own `tracing` subscriber.

use crate::log::{Logger, Severity};
use std::fmt::Arguments;

/// Logger that forwards records to whatever `tracing` subscriber the
/// application installed, bypassing `unitlog`'s own sink and filter.
///
/// Each event carries `unit` and `severity` fields so that FATAL and PANIC
/// records stay distinguishable after being mapped onto `tracing`'s ERROR.
///
/// # Example
///
/// ```
/// use unitlog::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Output depends on the subscriber installed by the application
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger::with_unit("db"));
/// logger.info("Using tracing backend");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    unit: String,
}

impl TracingLogger {
    /// Create an adapter with an empty unit name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter that tags every event with `unit`.
    pub fn with_unit(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// Unit name attached to events.
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

macro_rules! forward {
    ($level:expr, $unit:expr, $severity:expr, $message:expr) => {
        tracing::event!(
            target: "unitlog",
            $level,
            unit = $unit,
            severity = $severity.as_str(),
            "{}",
            $message
        )
    };
}

fn emit(severity: Severity, unit: &str, args: Arguments<'_>) {
    // Rendered before the event so arguments that log do so outside the dispatcher.
    let message = args.to_string();
    match severity.tracing_level() {
        tracing::Level::TRACE => forward!(tracing::Level::TRACE, unit, severity, message),
        tracing::Level::DEBUG => forward!(tracing::Level::DEBUG, unit, severity, message),
        tracing::Level::INFO => forward!(tracing::Level::INFO, unit, severity, message),
        tracing::Level::WARN => forward!(tracing::Level::WARN, unit, severity, message),
        tracing::Level::ERROR => forward!(tracing::Level::ERROR, unit, severity, message),
    }
}

impl Logger for TracingLogger {
    fn log(&self, severity: Severity, args: Arguments<'_>) {
        emit(severity, &self.unit, args);
    }
}
