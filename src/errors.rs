//! Centralized error handling.
//!
//! Provides a unified error type for the whole crate. The chain layer is
//! strict: a missing record, a transient provider failure, and a malformed
//! tuple are distinct variants. The service layer catches all of them and
//! degrades to default view models, so callers of the aggregator never see
//! these errors directly.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Record not found")]
    NotFound,

    // External read errors
    #[error("Contract read failed: {0}")]
    Read(String),

    #[error("Failed to decode {function} result: {reason}")]
    Decode { function: String, reason: String },

    // Validation
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("{0}")]
    Validation(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // Session store / fixture I/O
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Json(#[from] serde_json::Error),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience constructors
impl AppError {
    pub fn read(msg: impl Into<String>) -> Self {
        AppError::Read(msg.into())
    }

    pub fn decode(function: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Decode {
            function: function.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True for "the registry has no such record", as opposed to a
    /// transient provider failure or a decoding problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
