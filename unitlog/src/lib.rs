//! unitlog - leveled, unit-tagged logging
//!
//! Application code writes records through named loggers and never depends
//! on a logging backend directly. Records are filtered by severity and
//! written to a configurable sink in plain, JSON or console layout.
//!
//! # Quick Start
//!
//! Configure once at startup, then create loggers wherever needed:
//!
//! ```
//! use unitlog::{init, new_logger, LogConfig, MemorySink};
//! use unitlog::log::Logger;
//! use unitlog::log_warn;
//!
//! let sink = MemorySink::new();
//! init(
//!     LogConfig::default()
//!         .with_sink(sink.clone())
//!         .with_min_level("warn")
//!         .with_timestamps(false),
//! );
//!
//! let db = new_logger("db");
//! db.debug("connecting");
//! log_warn!(db, "slow query: {}ms", 250);
//! assert_eq!(sink.lines(), vec!["[WARN] db: slow query: 250ms"]);
//! ```
//!
//! Code that prefers explicit wiring over process-wide state can build a
//! [`LogContext`] and hand out loggers from it with [`LogContext::logger`].

pub mod config;
mod context;
pub mod filter;
pub mod format;
mod global;
pub mod log;
pub mod sink;

pub use config::{ConfigError, LogConfig};
pub use context::LogContext;
pub use filter::LevelFilter;
pub use format::{LogFormat, LogRecord};
pub use global::{current, init, new_logger};
pub use log::{Logger, NamedLogger, Severity};
pub use sink::{MemorySink, Sink};

/// Version of the unitlog library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
