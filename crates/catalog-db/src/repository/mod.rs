//! # Repository Module
//!
//! Business-facing operations over the Store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.items().create(&fields)                                    │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── create(&self, fields)        pre-check name, then insert          │
//! │  ├── fetch_by_id(&self, id)                                            │
//! │  ├── fetch_by_name(&self, name)                                        │
//! │  ├── fetch_all(&self, skip, limit)                                     │
//! │  ├── update(&self, id, fields)    pre-check id, then replace           │
//! │  └── delete(&self, id)            pre-check id, then delete            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemStore (one SQL statement per call)                                │
//! │                                                                         │
//! │  Pre-checks only produce a friendlier error sooner. When a concurrent  │
//! │  request slips in between check and write, the Store's write fails     │
//! │  and the Repository reports the SAME error the pre-check would have.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use catalog_core::ItemId;
use thiserror::Error;

use crate::error::DbError;

pub mod item;

pub use item::ItemRepository;

// =============================================================================
// Repository Errors
// =============================================================================

/// How a missing item was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKey {
    Id(ItemId),
    Name(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Id(id) => write!(f, "id {}", id),
            ItemKey::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Errors returned by [`ItemRepository`].
///
/// `DuplicateName` and `NotFound` are semantic outcomes and stable across
/// both detection paths (pre-check and Store write). `Storage` is
/// everything else the database can throw.
#[derive(Debug, Error)]
pub enum RepoError {
    /// An item with this name already exists.
    #[error("Item already exists: '{name}'")]
    DuplicateName { name: String },

    /// No item matches the lookup.
    #[error("Item not found with {0}")]
    NotFound(ItemKey),

    /// Underlying database failure.
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl RepoError {
    /// Maps a Store write failure into the Repository vocabulary.
    ///
    /// ```text
    /// DbError::UniqueViolation → RepoError::DuplicateName
    /// DbError::NotFound        → RepoError::NotFound(key)
    /// anything else            → RepoError::Storage
    /// ```
    pub(crate) fn from_store(err: DbError, key: ItemKey) -> Self {
        match err {
            DbError::UniqueViolation { value, .. } => RepoError::DuplicateName { name: value },
            DbError::NotFound { .. } => RepoError::NotFound(key),
            other => RepoError::Storage(other),
        }
    }
}

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;
