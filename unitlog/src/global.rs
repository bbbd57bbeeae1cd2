//! Process-wide logging configuration.
//!
//! Holds the [`LogContext`] used by loggers from [`new_logger`]. Until
//! [`init`] is called it is the default configuration: stderr, DEBUG, plain.

use std::sync::{OnceLock, RwLock};

use crate::config::LogConfig;
use crate::context::LogContext;
use crate::log::NamedLogger;

static GLOBAL: OnceLock<RwLock<LogContext>> = OnceLock::new();

fn state() -> &'static RwLock<LogContext> {
    GLOBAL.get_or_init(|| RwLock::new(LogContext::default()))
}

/// Install `config` as the process-wide logging configuration.
///
/// Replaces whatever was installed before (last call wins, nothing is
/// merged). Loggers from [`new_logger`] pick the new configuration up on
/// their next write, including loggers created before this call.
///
/// Never fails. Configuration problems are reported as WARN records through
/// the configuration being replaced, then defaults are used in their place.
///
/// Call once, early, before spawning concurrent work. Racing writers are
/// memory-safe but may land in either configuration.
///
/// Returns the installed context.
pub fn init(config: LogConfig) -> LogContext {
    let (context, warnings) = LogContext::build(&config);
    current().report(&warnings);

    let mut guard = state()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = context.clone();
    context
}

/// The currently installed process-wide context.
pub fn current() -> LogContext {
    state()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Create a logger tagged with `unit` that follows the process-wide
/// configuration.
///
/// Pure construction: no I/O and no validation. An empty unit is allowed.
pub fn new_logger(unit: &str) -> NamedLogger {
    NamedLogger::global(unit)
}
