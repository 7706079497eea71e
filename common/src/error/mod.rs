//! Error types for the account ledger
//!
//! This module provides the unified error handling layer shared by the
//! ledger service and any repository implementation plugged into it. The
//! ledger operations themselves define no failure taxonomy of their own:
//! insufficient funds is reported through the withdrawal outcome rather
//! than an error, and an unknown account number is represented as the
//! empty account. What remains are the ambient failure channels below.

use std::fmt::Display;
use thiserror::Error;

/// Account ledger error type
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by a repository storage backend
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::Storage(msg) => Error::Storage(format!("{}: {}", context, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::Io(e) => Error::Io(e),
                Error::Serialization(e) => Error::Serialization(e),
            }
        })
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}
