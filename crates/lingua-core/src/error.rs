//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No node in the catalog carries the given identifier.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No learning path in the catalog carries the given identifier.
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// A question has no option with the given identifier.
    #[error("option not found: {0}")]
    OptionNotFound(String),

    /// A required identifier or parameter was missing or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (catalog source I/O, deserialization).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// True when the error means an identifier did not resolve.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NodeNotFound(_) | Self::PathNotFound(_) | Self::OptionNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants_are_not_found() {
        assert!(DomainError::NodeNotFound("n1".into()).is_not_found());
        assert!(DomainError::PathNotFound("p1".into()).is_not_found());
        assert!(DomainError::OptionNotFound("o1".into()).is_not_found());
        assert!(!DomainError::Validation("bad".into()).is_not_found());
    }

    #[test]
    fn test_display_includes_identifier() {
        let err = DomainError::NodeNotFound("n42".into());
        assert_eq!(err.to_string(), "node not found: n42");
    }
}
