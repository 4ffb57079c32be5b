//! Utility module: error types, logging, validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use logger::{init_logger, init_logger_with_file};
pub use result::AppResult;
pub use validation::validate_payload;
