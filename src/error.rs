//! Custom error types for the crate.
//!
//! This module defines the primary error type, `SensorError`. Using the
//! `thiserror` crate, it provides a centralized and consistent way to handle
//! the failures that can occur while reading or writing saved-session record
//! files:
//!
//! - **`Io`**: Wraps standard `std::io::Error`, covering file access issues.
//! - **`Record`**: Wraps `serde_json::Error` for record files whose contents
//!   cannot be coerced to the saved-session contract (for example a string
//!   where a numeric field belongs). This is an input-contract violation and
//!   is never retried or recovered internally.
//!
//! By using `#[from]`, `SensorError` can be seamlessly created from the
//! underlying error types, simplifying error handling with the `?` operator.

use thiserror::Error;

/// Convenience alias for results using the crate error type.
pub type SensorResult<T> = std::result::Result<T, SensorError>;

#[derive(Error, Debug)]
pub enum SensorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Saved-session record error: {0}")]
    Record(#[from] serde_json::Error),
}
