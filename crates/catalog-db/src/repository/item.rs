//! # Item Repository
//!
//! Orchestrates [`ItemStore`] calls into the catalog's user-facing
//! semantics.
//!
//! ## Race Windows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create("Widget")             A                    B                    │
//! │  ──────────────────────────────────────────────────────────────────     │
//! │  get_by_name("Widget")       none                 none                  │
//! │  insert("Widget")            Ok(id=1)             UNIQUE violation      │
//! │  result                      Ok                   DuplicateName         │
//! │                                                                         │
//! │  delete(1)                    A                    B                    │
//! │  ──────────────────────────────────────────────────────────────────     │
//! │  get_by_id(1)                found                found                 │
//! │  DELETE … WHERE id = 1       1 row                0 rows                │
//! │  result                      Ok                   NotFound              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loser of every race gets the same error it would have gotten from
//! the pre-check.

use catalog_core::{Item, ItemFields, ItemId, DEFAULT_PAGE_SIZE};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use super::{ItemKey, RepoError, RepoResult};
use crate::store::ItemStore;

/// Repository for catalog items.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.items();
///
/// let item = repo.create(&fields).await?;
/// let same = repo.fetch_by_id(item.id).await?;
/// repo.delete(item.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    store: ItemStore,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository {
            store: ItemStore::new(pool),
        }
    }

    /// Creates an item.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Created item with its new id
    /// * `Err(RepoError::DuplicateName)` - Name taken, whether caught by the
    ///   pre-check or by the unique index
    pub async fn create(&self, fields: &ItemFields) -> RepoResult<Item> {
        if self.store.get_by_name(&fields.name).await?.is_some() {
            warn!(name = %fields.name, "Rejected duplicate item name");
            return Err(RepoError::DuplicateName {
                name: fields.name.clone(),
            });
        }

        let item = match self.store.insert(fields).await {
            Ok(item) => item,
            Err(e) => {
                let err = RepoError::from_store(e, ItemKey::Name(fields.name.clone()));
                if let RepoError::DuplicateName { name } = &err {
                    warn!(name = %name, "Duplicate item name caught by unique index");
                }
                return Err(err);
            }
        };

        info!(id = item.id, name = %item.name, "Item created");
        Ok(item)
    }

    /// Fetches an item by id.
    pub async fn fetch_by_id(&self, id: ItemId) -> RepoResult<Item> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(ItemKey::Id(id)))
    }

    /// Fetches an item by exact name.
    pub async fn fetch_by_name(&self, name: &str) -> RepoResult<Item> {
        self.store
            .get_by_name(name)
            .await?
            .ok_or_else(|| RepoError::NotFound(ItemKey::Name(name.to_string())))
    }

    /// Lists items in id order.
    ///
    /// ## Arguments
    /// * `skip` - Items to skip; defaults to 0
    /// * `limit` - Page size; defaults to `DEFAULT_PAGE_SIZE` (100)
    pub async fn fetch_all(&self, skip: Option<u32>, limit: Option<u32>) -> RepoResult<Vec<Item>> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);

        let items = self.store.list(skip, limit).await?;
        debug!(skip, limit, count = items.len(), "Fetched item page");
        Ok(items)
    }

    /// Replaces all mutable fields of an existing item.
    ///
    /// `fields` is a full replacement: a `None` description clears the
    /// stored one.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item as now stored
    /// * `Err(RepoError::NotFound)` - No such id, before or during the replace
    /// * `Err(RepoError::DuplicateName)` - Another item has the new name
    pub async fn update(&self, id: ItemId, fields: &ItemFields) -> RepoResult<Item> {
        self.fetch_by_id(id).await?;

        let item = self
            .store
            .replace_by_id(id, fields)
            .await
            .map_err(|e| RepoError::from_store(e, ItemKey::Id(id)))?;

        info!(id, name = %item.name, "Item updated");
        Ok(item)
    }

    /// Permanently deletes an item.
    ///
    /// ## Returns
    /// * `Ok(())` - Deleted
    /// * `Err(RepoError::NotFound)` - No such id, including when a concurrent
    ///   delete removed it first
    pub async fn delete(&self, id: ItemId) -> RepoResult<()> {
        self.fetch_by_id(id).await?;

        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| RepoError::from_store(e, ItemKey::Id(id)))?;

        info!(id, "Item deleted");
        Ok(())
    }

    /// Counts stored items.
    pub async fn count(&self) -> RepoResult<i64> {
        Ok(self.store.count().await?)
    }
}
