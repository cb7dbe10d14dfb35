//! Cross-cutting helpers: errors, logging, request tracing.

pub mod error;
pub mod logger;
pub mod request_log;

pub use error::{AppError, AppResult};
pub use logger::init_logger;
pub use request_log::log_request;
