//! Convenience result type alias for Dongle Tracker.

use crate::error::AppError;

/// A specialized `Result` type for Dongle Tracker operations.
pub type AppResult<T> = Result<T, AppError>;
