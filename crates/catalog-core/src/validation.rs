//! # Validation Module
//!
//! Input validation for item payloads and listing parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (serde)                                       │
//! │  ├── JSON shape, types, price → cents                                  │
//! │  └── Rejections become ValidationError::InvalidFormat                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name: required, trimmed, ≤ 80 chars                               │
//! │  ├── description: ≤ 200 chars                                          │
//! │  └── price: 0 ≤ price ≤ MAX_PRICE_CENTS                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── UNIQUE(name), the authoritative duplicate guard                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_item_name, validate_price};
//! use catalog_core::Price;
//!
//! assert_eq!(validate_item_name("  Widget ").unwrap(), "Widget");
//! assert!(validate_price(Price::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::price::Price;
use crate::types::{ItemFields, ItemId};
use crate::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PAGE_SIZE, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 80 characters after trimming
/// - Case is preserved; uniqueness is case-sensitive
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Widget").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// assert!(validate_item_name(&"x".repeat(81)).is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates an optional description.
///
/// ## Rules
/// - `None` is accepted (stored as NULL)
/// - At most 200 characters
pub fn validate_description(description: Option<String>) -> ValidationResult<Option<String>> {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => {
            Err(ValidationError::TooLong {
                field: "description".to_string(),
                max: MAX_DESCRIPTION_LEN,
            })
        }
        other => Ok(other),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed `MAX_PRICE_CENTS`
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
/// use catalog_core::Price;
///
/// assert!(validate_price(Price::from_cents(1099)).is_ok());
/// assert!(validate_price(Price::zero()).is_ok());
/// assert!(validate_price(Price::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Price) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS / 100,
        });
    }

    Ok(())
}

/// Validates a page size requested by a client.
pub fn validate_page_limit(limit: u32) -> ValidationResult<()> {
    if limit > MAX_PAGE_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "limit".to_string(),
            min: 0,
            max: MAX_PAGE_SIZE as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a full item payload and returns its normalized form.
///
/// Runs every field rule; the first failure wins. The returned fields are
/// what the Repository stores (name trimmed).
pub fn validate_item_fields(fields: ItemFields) -> ValidationResult<ItemFields> {
    let name = validate_item_name(&fields.name)?;
    let description = validate_description(fields.description)?;
    validate_price(fields.price)?;

    Ok(ItemFields {
        name,
        description,
        price: fields.price,
    })
}

/// Checks that an id echoed in a request body agrees with the path id.
///
/// A body without an id is accepted.
pub fn validate_matching_id(path_id: ItemId, body_id: Option<ItemId>) -> ValidationResult<()> {
    match body_id {
        Some(body_id) if body_id != path_id => Err(ValidationError::Mismatch {
            field: "id".to_string(),
            expected: path_id.to_string(),
            actual: body_id.to_string(),
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert_eq!(validate_item_name("Widget").unwrap(), "Widget");
        assert_eq!(validate_item_name("  Widget  ").unwrap(), "Widget");
        assert_eq!(validate_item_name(&"a".repeat(80)).unwrap().len(), 80);

        assert!(matches!(
            validate_item_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_item_name("   ").is_err());
        assert!(matches!(
            validate_item_name(&"a".repeat(81)),
            Err(ValidationError::TooLong { max: 80, .. })
        ));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 80 two-byte characters is 160 bytes but still within the limit
        let name = "é".repeat(80);
        assert!(validate_item_name(&name).is_ok());
    }

    #[test]
    fn test_name_case_is_preserved() {
        assert_eq!(validate_item_name("wIdGeT").unwrap(), "wIdGeT");
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description(None).unwrap(), None);
        assert_eq!(
            validate_description(Some("blue".to_string())).unwrap(),
            Some("blue".to_string())
        );
        assert!(validate_description(Some("d".repeat(200))).is_ok());
        assert!(validate_description(Some("d".repeat(201))).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Price::zero()).is_ok());
        assert!(validate_price(Price::from_cents(999)).is_ok());
        assert!(validate_price(Price::from_cents(MAX_PRICE_CENTS)).is_ok());

        assert!(matches!(
            validate_price(Price::from_cents(-1)),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_price(Price::from_cents(MAX_PRICE_CENTS + 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_page_limit() {
        assert!(validate_page_limit(0).is_ok());
        assert!(validate_page_limit(MAX_PAGE_SIZE).is_ok());
        assert!(validate_page_limit(MAX_PAGE_SIZE + 1).is_err());
    }

    #[test]
    fn test_validate_item_fields_normalizes() {
        let fields = ItemFields::new(" Widget ", None, Price::from_cents(999));
        let fields = validate_item_fields(fields).unwrap();
        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.description, None);
        assert_eq!(fields.price.cents(), 999);
    }

    #[test]
    fn test_validate_item_fields_reports_first_failure() {
        let fields = ItemFields::new("", Some("d".repeat(500)), Price::from_cents(-5));
        assert!(matches!(
            validate_item_fields(fields),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_matching_id() {
        assert!(validate_matching_id(1, None).is_ok());
        assert!(validate_matching_id(1, Some(1)).is_ok());
        assert!(matches!(
            validate_matching_id(1, Some(2)),
            Err(ValidationError::Mismatch { .. })
        ));
    }
}
