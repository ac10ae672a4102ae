//! # Store Module
//!
//! The persistence layer: one SQL statement per operation, no business
//! rules beyond what the schema enforces.
//!
//! ## Store vs Repository
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ItemRepository (../repository)                                        │
//! │  ├── friendly pre-checks (name taken? id exists?)                      │
//! │  └── translates DbError → RepoError                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemStore (THIS MODULE)                                               │
//! │  ├── insert          INSERT … RETURNING                                │
//! │  ├── get_by_id       SELECT … WHERE id = ?                             │
//! │  ├── get_by_name     SELECT … WHERE name = ?                           │
//! │  ├── list            SELECT … ORDER BY id LIMIT ? OFFSET ?             │
//! │  ├── replace_by_id   UPDATE … WHERE id = ? RETURNING                   │
//! │  └── delete_by_id    DELETE … WHERE id = ?                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: UNIQUE(name), AUTOINCREMENT id  ← the authoritative guards    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod item;

pub use item::ItemStore;
