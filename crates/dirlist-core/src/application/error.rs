//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not invalid
//! input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Failed to {operation} at {}: {reason}", path.display())]
    FilesystemError {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Filesystem adapter state is poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure no component of the path is an existing file".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
