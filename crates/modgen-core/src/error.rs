//! Unified error handling for modgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for modgen core operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Errors from the domain layer (invalid identifier).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, path resolution).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ScaffoldError {
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
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for the identifier validation failure.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidIdentifier { .. }))
    }

    /// Kind of the underlying I/O error, if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Application(e) => e.io_kind(),
            Self::Domain(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn invalid_identifier_is_validation() {
        let err: ScaffoldError = DomainError::InvalidIdentifier { raw: "x".into() }.into();
        assert!(err.is_invalid_identifier());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn filesystem_error_keeps_io_kind() {
        let err: ScaffoldError = ApplicationError::filesystem(
            "/nope",
            "read",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_invalid_identifier());
    }

    #[test]
    fn missing_root_is_not_found() {
        let err: ScaffoldError = ApplicationError::AppRootNotFound {
            start: PathBuf::from("/tmp"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("--app-dir")));
    }

    #[test]
    fn filesystem_error_source_is_io_error() {
        let err: ScaffoldError = ApplicationError::filesystem(
            "/nope",
            "write",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        )
        .into();
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<io::Error>());
        // transparent: the ApplicationError's source is the io::Error
        assert!(source.is_some());
    }
}
