//! Logger trait definition.

use std::fmt::Arguments;

use super::Severity;

/// Leveled logging interface for application components.
///
/// Every severity has two entry points: a plain one taking a ready message
/// (`warn("slow query")`) and a formatted one taking `format_args!` output
/// (`warn_fmt(format_args!("slow query: {}ms", 250))`). Both end up in
/// [`Logger::log`] and produce identical records for identical text. The
/// `log_*!` macros are shorthand for the formatted variants.
///
/// `fatal` and `panic` only write a record. They return normally and never
/// exit the process or unwind; callers that need to stop must do so
/// themselves.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use unitlog::log::{Logger, NoOpLogger};
/// use unitlog::{log_info, log_debug};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("Application started");
/// log_debug!(logger, "listening on port {}", 8080);
/// ```
pub trait Logger: Send + Sync {
    /// Write a record at the given severity.
    ///
    /// This is the core method that implementations must provide.
    fn log(&self, severity: Severity, args: Arguments<'_>);

    /// Whether a record at `severity` would currently be written.
    fn enabled(&self, _severity: Severity) -> bool {
        true
    }

    /// Log a trace-level message.
    fn trace(&self, message: &str) {
        self.log(Severity::Trace, format_args!("{}", message));
    }

    /// Formatted [`Logger::trace`].
    fn trace_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Trace, args);
    }

    /// Log a debug-level message.
    fn debug(&self, message: &str) {
        self.log(Severity::Debug, format_args!("{}", message));
    }

    /// Formatted [`Logger::debug`].
    fn debug_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Log a info-level message.
    fn info(&self, message: &str) {
        self.log(Severity::Info, format_args!("{}", message));
    }

    /// Formatted [`Logger::info`].
    fn info_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Log a warn-level message.
    fn warn(&self, message: &str) {
        self.log(Severity::Warn, format_args!("{}", message));
    }

    /// Formatted [`Logger::warn`].
    fn warn_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Warn, args);
    }

    /// Log a error-level message.
    fn error(&self, message: &str) {
        self.log(Severity::Error, format_args!("{}", message));
    }

    /// Formatted [`Logger::error`].
    fn error_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Write a FATAL record. Does not terminate the process.
    fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, format_args!("{}", message));
    }

    /// Formatted [`Logger::fatal`]. Does not terminate the process.
    fn fatal_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Fatal, args);
    }

    /// Write a PANIC record. Does not unwind.
    fn panic(&self, message: &str) {
        self.log(Severity::Panic, format_args!("{}", message));
    }

    /// Formatted [`Logger::panic`]. Does not unwind.
    fn panic_fmt(&self, args: Arguments<'_>) {
        self.log(Severity::Panic, args);
    }
}

/// Convenience macros for logging with format strings.
///
/// These macros provide a familiar interface similar to `tracing` macros.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)*) => {
        $logger.panic_fmt(format_args!($($arg)*))
    };
}
