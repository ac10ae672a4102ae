//! # Domain Types
//!
//! The item model.
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │        Item          │        │      ItemFields      │
//! │  ──────────────────  │        │  ──────────────────  │
//! │  id (i64, immutable) │  ◄──── │  name                │
//! │  name (unique)       │ insert │  description?        │
//! │  description?        │ replace│  price               │
//! │  price (cents)       │        │                      │
//! └──────────────────────┘        └──────────────────────┘
//! ```
//!
//! `ItemFields` is the full set of mutable fields. Create and update both
//! take one, so an update is always a whole-record replace.

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// System-assigned item identifier.
pub type ItemId = i64;

// =============================================================================
// Item
// =============================================================================

/// A catalog item as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned on creation, never reused.
    pub id: ItemId,

    /// Unique across all existing items (case-sensitive).
    pub name: String,

    /// Optional free text.
    pub description: Option<String>,

    /// Price in cents; serialized as a two-decimal number.
    pub price: Price,
}

impl Item {
    /// Returns the mutable part of the item.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

// =============================================================================
// Item Fields
// =============================================================================

/// The three mutable fields of an item, always supplied together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, description: Option<String>, price: Price) -> Self {
        ItemFields {
            name: name.into(),
            description,
            price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
