//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core (this file)                                              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  catalog-db (separate crate)                                           │
//! │  ├── DbError          - SQLite / pool failures                         │
//! │  └── RepoError        - DuplicateName / NotFound / Storage             │
//! │                                                                         │
//! │  catalog-api                                                           │
//! │  └── ApiError         - What HTTP clients see (status + code + text)   │
//! │                                                                         │
//! │  Flow: ValidationError ──────────────────────┐                         │
//! │        DbError → RepoError ──────────────────┴──► ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the request-facing layer before anything reaches the
/// Repository. Each variant names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a non-numeric price, malformed JSON).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two values that must agree do not.
    #[error("{field} mismatch: expected {expected}, got {actual}")]
    Mismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "description".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "description must be at most 200 characters");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_mismatch_message() {
        let err = ValidationError::Mismatch {
            field: "id".to_string(),
            expected: "1".to_string(),
            actual: "2".to_string(),
        };
        assert_eq!(err.to_string(), "id mismatch: expected 1, got 2");
    }
}
