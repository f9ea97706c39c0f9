//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use hailhub_core::error::AppError;
use hailhub_core::result::AppResult;

/// Validates a request DTO, mapping validator errors into the domain
/// validation error.
pub fn validate_request<T: Validate>(req: &T) -> AppResult<()> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
