//! Logging configuration.
//!
//! [`LogConfig`] is built once at startup, either in code through its `with_*`
//! methods, from the environment, or from an INI file, and then handed to
//! [`init`](crate::init) or [`LogContext::new`](crate::LogContext::new).
//!
//! # Example
//!
//! ```
//! use unitlog::config::LogConfig;
//! use unitlog::format::LogFormat;
//!
//! let config = LogConfig::default()
//!     .with_min_level("warn")
//!     .with_format(LogFormat::Json);
//! assert_eq!(config.min_level.as_deref(), Some("warn"));
//! ```

mod env;
mod file;
mod parser;
mod settings;

pub use env::{ENV_LOG_FILE, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_LEVELS};
pub use file::ConfigError;
pub use settings::LogConfig;
