//! Silent logger.

use crate::log::{Logger, Severity};
use std::fmt::Arguments;

/// A logger that discards every record.
///
/// Useful where a component demands a [`Logger`] but its output would only be
/// noise, for example unit tests and benchmarks.
///
/// # Example
///
/// ```
/// use unitlog::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _severity: Severity, _args: Arguments<'_>) {}

    #[inline]
    fn enabled(&self, _severity: Severity) -> bool {
        false
    }
}
