//! # Item Store
//!
//! Atomic single-record operations on the `items` table.
//!
//! Every method is exactly one SQL statement, so SQLite runs each in its own
//! implicit transaction: a caller either sees the whole write or none of it.
//! Conflicts are reported by the statement itself:
//!
//! | Statement outcome             | Result                          |
//! |-------------------------------|---------------------------------|
//! | UNIQUE(name) violated         | `DbError::UniqueViolation`      |
//! | UPDATE/DELETE matched 0 rows  | `DbError::NotFound`             |

use catalog_core::{Item, ItemFields, ItemId, Price, MAX_PAGE_SIZE};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Row shape of the `items` table.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    price_cents: i64,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price: Price::from_cents(row.price_cents),
        }
    }
}

/// Repository-facing store for item records.
///
/// ## Usage
/// ```rust,ignore
/// let store = ItemStore::new(pool);
///
/// let item = store.insert(&fields).await?;
/// let page = store.list(0, 20).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Creates a new ItemStore.
    pub fn new(pool: SqlitePool) -> Self {
        ItemStore { pool }
    }

    /// Inserts a new item and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Persisted item
    /// * `Err(DbError::UniqueViolation)` - Name already exists
    pub async fn insert(&self, fields: &ItemFields) -> DbResult<Item> {
        debug!(name = %fields.name, "Inserting item");

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, description, price_cents)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, description, price_cents
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price.cents())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| name_conflict(e, &fields.name))?;

        debug!(id = row.id, "Item inserted");
        Ok(row.into())
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: ItemId) -> DbResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, price_cents
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    /// Gets an item by its exact (case-sensitive) name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, price_cents
            FROM items
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    /// Lists items in id order.
    ///
    /// ## Arguments
    /// * `offset` - Number of items to skip from the start of the ordering
    /// * `limit` - Page size, clamped to `MAX_PAGE_SIZE`; `0` yields an empty page
    pub async fn list(&self, offset: u32, limit: u32) -> DbResult<Vec<Item>> {
        let limit = limit.min(MAX_PAGE_SIZE);

        debug!(offset, limit, "Listing items");

        if limit == 0 {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, price_cents
            FROM items
            ORDER BY id ASC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    /// Overwrites all mutable fields of an existing item.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item as now stored
    /// * `Err(DbError::NotFound)` - No item with this id
    /// * `Err(DbError::UniqueViolation)` - Another item already has the new name
    pub async fn replace_by_id(&self, id: ItemId, fields: &ItemFields) -> DbResult<Item> {
        debug!(id, name = %fields.name, "Replacing item");

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items SET
                name = ?2,
                description = ?3,
                price_cents = ?4
            WHERE id = ?1
            RETURNING id, name, description, price_cents
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price.cents())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| name_conflict(e, &fields.name))?;

        row.map(Item::from)
            .ok_or_else(|| DbError::not_found("Item", id.to_string()))
    }

    /// Permanently removes an item.
    ///
    /// ## Returns
    /// * `Ok(())` - Row deleted
    /// * `Err(DbError::NotFound)` - No item with this id (including a lost delete race)
    pub async fn delete_by_id(&self, id: ItemId) -> DbResult<()> {
        debug!(id, "Deleting item");

        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id.to_string()));
        }

        Ok(())
    }

    /// Counts stored items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Attaches the offending name to a unique violation.
fn name_conflict(err: sqlx::Error, name: &str) -> DbError {
    match DbError::from(err) {
        DbError::UniqueViolation { field, .. } => DbError::duplicate(field, name),
        other => other,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
