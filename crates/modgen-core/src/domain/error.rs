// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Identifier validation is the only business rule, so there is a single
/// variant. All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid module name '{raw}'. Example of valid one: VendorName_ModuleName.")]
    InvalidIdentifier { raw: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { raw } => vec![
                format!("'{}' has no '_' between vendor and module", raw),
                "Use the form VendorName_ModuleName, e.g. Acme_Catalog".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shows_example() {
        let err = DomainError::InvalidIdentifier {
            raw: "InvalidName".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid module name 'InvalidName'. Example of valid one: VendorName_ModuleName."
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("Acme_Catalog")));
    }
}
