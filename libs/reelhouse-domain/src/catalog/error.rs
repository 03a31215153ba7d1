//! Domain errors for catalog operations
//!
//! Construction-time validation and registry lookups report through
//! `CatalogError`. Updates to an existing price or rating never do: an
//! out-of-range update leaves the old value in place without an error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::ids::{ContentId, PlanId, UserId};

/// Errors that can occur while building or querying the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A plan was created with a non-positive monthly price
    #[error("Monthly price must be positive, got ${0}")]
    InvalidPrice(Decimal),

    /// A plan was created without any screens
    #[error("A plan must allow at least one screen")]
    InvalidScreens,

    /// Content was created with a rating outside 1..=5
    #[error("Rating {0} is outside the allowed range 1-5")]
    InvalidRating(u8),

    /// Content was created with a blank title
    #[error("Content title cannot be empty")]
    EmptyTitle,

    /// The quality label is not one of the known tiers
    #[error("Unknown quality tier: {0}")]
    UnknownQuality(String),

    /// The content kind label is neither movie nor series
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),

    /// A plan with this id is already registered
    #[error("Plan {0} is already registered")]
    DuplicatePlan(PlanId),

    /// Content with this id is already registered
    #[error("Content {0} is already registered")]
    DuplicateContent(ContentId),

    /// A user with this id is already registered
    #[error("User {0} is already registered")]
    DuplicateUser(UserId),

    /// No registered user has this id
    #[error("User {0} is not registered")]
    UnknownUser(UserId),

    /// The content was never passed to `add_content`
    #[error("Content {0} is not registered in the catalog")]
    UnregisteredContent(ContentId),
}

impl CatalogError {
    /// Create an unknown quality error
    pub fn unknown_quality(label: impl Into<String>) -> Self {
        Self::UnknownQuality(label.into())
    }

    /// Create an unknown kind error
    pub fn unknown_kind(label: impl Into<String>) -> Self {
        Self::UnknownKind(label.into())
    }

    /// Check if this error comes from invalid constructor input
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPrice(_)
                | Self::InvalidScreens
                | Self::InvalidRating(_)
                | Self::EmptyTitle
                | Self::UnknownQuality(_)
                | Self::UnknownKind(_)
        )
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_price_error() {
        let err = CatalogError::InvalidPrice(Decimal::NEGATIVE_ONE);
        assert_eq!(err.to_string(), "Monthly price must be positive, got $-1");
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_unregistered_content_error() {
        let err = CatalogError::UnregisteredContent(ContentId::new(999));
        assert!(err.to_string().contains("999"));
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_unknown_quality_error() {
        let err = CatalogError::unknown_quality("8K");
        assert!(matches!(err, CatalogError::UnknownQuality(_)));
        assert_eq!(err.to_string(), "Unknown quality tier: 8K");
    }
}
