//! # catalog-core: Pure Domain Types for the Catalog
//!
//! This crate holds the item model and the input rules that every other
//! layer relies on. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 catalog-api (axum handlers)                     │   │
//! │  │      POST /items ── GET /items ── PUT /items/{id} ── DELETE     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validate_item_fields()                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐    ┌───────────┐    ┌──────────────┐           │   │
//! │  │   │   types   │    │   price   │    │  validation  │           │   │
//! │  │   │   Item    │    │   Price   │    │  name/desc/  │           │   │
//! │  │   │ ItemFields│    │  (cents)  │    │  price rules │           │   │
//! │  │   └───────────┘    └───────────┘    └──────────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                catalog-db (Store + Repository)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item` and `ItemFields`
//! - [`price`] - `Price`, a two-decimal amount stored as integer cents
//! - [`error`] - `ValidationError`
//! - [`validation`] - Field rules applied before anything reaches storage
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{validation::validate_item_fields, ItemFields, Price};
//!
//! let fields = ItemFields::new("  Widget ", None, Price::from_cents(999));
//! let fields = validate_item_fields(fields).unwrap();
//! assert_eq!(fields.name, "Widget");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use price::Price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LEN: usize = 80;

/// Maximum length of an item description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Page size used when a listing request does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Hard upper bound on a single listing page.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Highest accepted price, in cents (999,999,999.99).
pub const MAX_PRICE_CENTS: i64 = 99_999_999_999;
