//! Convenience result type alias for Recruit Intake.

use crate::error::AppError;

/// A specialized `Result` type for Recruit Intake operations.
pub type AppResult<T> = Result<T, AppError>;
