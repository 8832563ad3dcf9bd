use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required path is empty: {field}")]
    EmptyPath { field: &'static str },

    #[error("Path is not valid UTF-8 and cannot be written to the listing: {}", path.display())]
    NonUtf8Path { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPath { field } => vec![
                format!("Pass a non-empty value for --{}", field),
                "Use --help for usage information".into(),
            ],
            Self::NonUtf8Path { path } => vec![
                format!("Rename the entry at {}", path.to_string_lossy()),
                "The listing file is UTF-8 text; every subdirectory name must be UTF-8".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
