//! Unified error handling for dirlist Core.
//!
//! Wraps domain and application errors behind one type so callers only ever
//! match on [`ListerError`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for dirlist Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListerError {
    /// Errors from the domain layer (invalid requests, unrepresentable paths).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ListerError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type ListerResult<T> = Result<T, ListerError>;
