//! Convenience result type alias for HailHub.

use crate::error::AppError;

/// A specialized `Result` type for HailHub operations.
pub type AppResult<T> = Result<T, AppError>;
