//! # catalog-db: Database Layer for the Catalog
//!
//! This crate provides durable item storage on SQLite via sqlx, and the
//! Repository that enforces the catalog's invariants on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  HTTP handler (POST /items)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   catalog-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌──────────────┐  ┌───────────────────┐  │   │
//! │  │   │   Database    │  │  Repository  │  │      Store        │  │   │
//! │  │   │   (pool.rs)   │  │ (repository) │  │     (store)       │  │   │
//! │  │   │               │  │              │  │                   │  │   │
//! │  │   │ SqlitePool    │─►│ItemRepository│─►│ ItemStore         │  │   │
//! │  │   │ Migrations    │  │ pre-checks,  │  │ one statement     │  │   │
//! │  │   │               │  │ RepoError    │  │ per operation     │  │   │
//! │  │   └───────────────┘  └──────────────┘  └───────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SQLite: items(id AUTOINCREMENT, name UNIQUE, description,      │   │
//! │  │               price_cents)                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - Atomic single-record SQL operations
//! - [`repository`] - Business-facing operations and `RepoError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("data.db")).await?;
//!
//! let item = db.items().create(&fields).await?;
//! let page = db.items().fetch_all(None, None).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::{ItemKey, ItemRepository, RepoError, RepoResult};
pub use store::ItemStore;
