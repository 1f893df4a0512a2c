//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::SectionKind;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Section not found
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// An edit or payload targeted a section of another kind
    #[error("Section kind mismatch: expected {expected}, got {actual}")]
    SectionKindMismatch {
        expected: SectionKind,
        actual: SectionKind,
    },

    /// The layout already holds the configured maximum of sections
    #[error("Section limit reached: {0}")]
    SectionLimitReached(usize),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Catalog collaborator error
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Configuration error
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SectionNotFound(_)
            | Self::SectionKindMismatch { .. }
            | Self::SectionLimitReached(_)
            | Self::ValidationError(_) => true,
            Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::CatalogError(_)
            | Self::ConfigError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_expected() {
        assert!(CoreError::SectionNotFound("s1".to_string()).is_expected());
        assert!(CoreError::ValidationError("missing image".to_string()).is_expected());
        assert!(CoreError::SectionKindMismatch {
            expected: SectionKind::Banner,
            actual: SectionKind::Stories,
        }
        .is_expected());
    }

    #[test]
    fn infrastructure_errors_are_not_expected() {
        assert!(!CoreError::StorageError("disk full".to_string()).is_expected());
        assert!(!CoreError::CatalogError("offline".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::SectionLimitReached(50)).unwrap();
        assert_eq!(json["code"], "SectionLimitReached");
        assert_eq!(json["details"], 50);
    }

    #[test]
    fn kind_mismatch_message_uses_wire_names() {
        let err = CoreError::SectionKindMismatch {
            expected: SectionKind::CategoryGrid,
            actual: SectionKind::FlashSale,
        };
        assert_eq!(
            err.to_string(),
            "Section kind mismatch: expected category-grid, got flash-sale"
        );
    }
}
