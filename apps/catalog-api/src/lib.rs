//! # Catalog API
//!
//! HTTP/JSON front end for the item catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog API Server                               │
//! │                                                                         │
//! │  Client ───► axum (8000) ───► routes ───► ItemRepository ───► SQLite  │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                              ApiError                                   │
//! │                         {code, message}                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary in `main.rs` wires configuration and signals around
//! [`serve`]; integration tests call [`serve`] directly on an ephemeral
//! port.

use std::future::Future;

use catalog_db::Database;
use tokio::net::TcpListener;
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::router;

/// Shared application state.
///
/// Handlers build a fresh `ItemRepository` per request from `db`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Serves the catalog on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Catalog API listening");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
