//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A filesystem operation failed. The underlying `io::Error` is kept
    /// untouched as the source.
    #[error("Failed to {operation} {path}: {source}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// No application root could be located.
    #[error("Could not locate an application root from {start}")]
    AppRootNotFound { start: PathBuf },

    /// Adapter state is unusable (lock poisoned, etc.).
    #[error("Adapter state error: {name}")]
    AdapterState { name: &'static str },
}

impl ApplicationError {
    /// Shorthand for wrapping an `io::Error` with its path.
    pub fn filesystem(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Kind of the underlying I/O error, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Filesystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, source, .. } => {
                let mut hints = vec![format!("Failed to access: {}", path.display())];
                match source.kind() {
                    io::ErrorKind::PermissionDenied => {
                        hints.push("Check that you have write permissions".into())
                    }
                    io::ErrorKind::NotFound => {
                        hints.push("Ensure the path exists and templates are installed".into())
                    }
                    _ => hints.push("Check available disk space".into()),
                }
                hints
            }
            Self::AppRootNotFound { start } => vec![
                format!("No 'app/etc' directory found above {}", start.display()),
                "Run the command from inside the application checkout".into(),
                "Or pass the application directory with --app-dir".into(),
            ],
            Self::AdapterState { name } => vec![
                format!("Component in a bad state: {}", name),
                "This is likely a bug".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::AppRootNotFound { .. } => ErrorCategory::NotFound,
            Self::AdapterState { .. } => ErrorCategory::Internal,
        }
    }
}
