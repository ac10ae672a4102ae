//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Router                                                                │
//! │  ├── /items        GET list_items    POST create_item                  │
//! │  ├── /items/{id}   GET get_item      PUT update_item   DELETE delete   │
//! │  └── /health       GET health                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub mod health;
pub mod items;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/health", get(health::health))
        .with_state(state)
}
