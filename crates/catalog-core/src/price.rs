//! # Price Module
//!
//! Provides the `Price` type for item prices.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Stored as a float:                                                     │
//! │    9.99 is really 9.9900000000000002131628...                           │
//! │    two "equal" prices can compare unequal after a round trip           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    JSON 9.99 ──round once──► 999 cents ──store/compare──► 999           │
//! │    999 cents ──render────────► JSON 9.99                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients speak decimal numbers (`9.99`). The conversion to cents happens
//! exactly once, on the way in, rounding half away from zero. Everything
//! after that (database column, equality, ordering) works on `i64` cents.
//!
//! ## Usage
//! ```rust
//! use catalog_core::price::Price;
//!
//! let price = Price::try_from_decimal(9.99).unwrap();
//! assert_eq!(price.cents(), 999);
//! assert_eq!(price.to_string(), "9.99");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;

/// Largest magnitude, in cents, that survives a trip through `f64` exactly.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_991.0;

// =============================================================================
// Price Type
// =============================================================================

/// A two-decimal amount held as integer cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: the type itself can hold negative values; whether a
///   negative price is *acceptable* is a validation rule, not a type rule
/// - **Custom serde**: serialized as a JSON number (`9.99`), not as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Creates a price from cents.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::price::Price;
    ///
    /// let price = Price::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Converts a decimal amount to a price, rounding to the nearest cent.
    ///
    /// ## Rounding
    /// Half away from zero: `0.125` → `0.13`, `-0.125` → `-0.13`.
    ///
    /// ## Errors
    /// `ValidationError::InvalidFormat` for NaN, infinities, and values too
    /// large to convert without losing cents.
    pub fn try_from_decimal(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "must be a finite number".to_string(),
            });
        }

        let cents = (value * 100.0).round();
        if cents.abs() > MAX_EXACT_CENTS {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "is too large".to_string(),
            });
        }

        Ok(Price(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal number, for serialization only.
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Price::try_from_decimal(value).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
