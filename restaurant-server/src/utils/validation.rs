//! Input validation helpers
//!
//! Bridges `validator` derive checks on request payloads to [`AppError`].

use validator::Validate;

use crate::utils::AppError;

/// Validate a request payload, mapping field errors to a 400 response.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
