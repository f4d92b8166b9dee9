//! JSON API over a shared [`NoteStore`].
//!
//! [`AppState`] owns the store for the life of the server; [`create_router`] wires
//! the handlers and request tracing.

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;

use crate::config::StoreConfig;
use crate::notes::NoteStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<NoteStore>>,
}

impl AppState {
    /// Build state with a fresh, empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(NoteStore::new(config))),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/api/notes/stats", get(handlers::stats))
        .route("/api/notes/evict-oldest", post(handlers::evict_oldest))
        // older clients still call the eviction valve by this name
        .route("/api/notes/premium-upgrade", post(handlers::evict_oldest))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
