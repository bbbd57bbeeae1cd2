//! Logging abstraction layer.
//!
//! Application code logs through the [`Logger`] trait and never names a
//! backend. Three implementations exist:
//!
//! - [`NamedLogger`]: unit-tagged logger writing through a
//!   [`LogContext`](crate::LogContext) (or the process-wide one)
//! - [`TracingLogger`]: forwards to the application's own `tracing` subscriber
//! - [`NoOpLogger`]: discards everything
//!
//! # Usage
//!
//! Components that need logging should accept an `Arc<dyn Logger>` and use
//! the provided macros:
//!
//! ```
//! use unitlog::log::{Logger, NoOpLogger};
//! use unitlog::{log_info, log_debug};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Arc<dyn Logger>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn do_work(&self) {
//!         self.logger.info("Starting work");
//!         log_debug!(self.logger, "processed {} items", 3);
//!     }
//! }
//!
//! MyComponent::new(Arc::new(NoOpLogger)).do_work();
//! ```

mod named;
mod noop;
mod severity;
mod tracing_adapter;
mod r#trait;

pub use named::NamedLogger;
pub use noop::NoOpLogger;
pub use r#trait::Logger;
pub use severity::{ParseSeverityError, Severity};
pub use tracing_adapter::TracingLogger;

