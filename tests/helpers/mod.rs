#![allow(dead_code)]

use jotboard::api::{create_router, AppState};
use jotboard::config::StoreConfig;
use jotboard::notes::{Note, NoteStore};

/// Store with the default limits (capacity 5).
pub fn test_store() -> NoteStore {
    NoteStore::new(StoreConfig::default())
}

/// Store with a custom capacity and default length limits.
pub fn store_with_capacity(capacity: usize) -> NoteStore {
    NoteStore::new(StoreConfig {
        capacity,
        ..StoreConfig::default()
    })
}

/// Add `count` notes titled "note 1".."note N". Returns them in insertion order.
pub fn fill(store: &mut NoteStore, count: usize) -> Vec<Note> {
    (1..=count)
        .map(|i| {
            store
                .add_note(&format!("note {i}"), &format!("<p>body {i}</p>"))
                .unwrap()
        })
        .collect()
}

/// Router over a fresh store with default config. Returns the state as well so
/// tests can inspect the store directly.
pub fn test_app() -> (axum::Router, AppState) {
    let state = AppState::new(StoreConfig::default());
    (create_router(state.clone()), state)
}
