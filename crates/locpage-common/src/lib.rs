//! Shared infrastructure for the locpage workspace: the application-wide
//! error type and the tracing-based logging bootstrap.

pub mod error;
pub mod logging;

pub use error::{LocPageError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
