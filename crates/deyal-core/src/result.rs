//! Result type aliases for Deyal.

use crate::DeyalError;

/// A specialized `Result` type for Deyal operations.
pub type DeyalResult<T> = Result<T, DeyalError>;
