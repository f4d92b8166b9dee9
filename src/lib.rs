//! Capped note board: a small JSON API over an in-memory, fixed-capacity note store.
//!
//! Notes live only in process memory. The store holds at most `capacity` notes
//! (five by default); creating a note in a full store fails with a capacity error,
//! and a caller may explicitly ask for the oldest note to be evicted to make room.
//!
//! | Field | Handling |
//! |-------|----------|
//! | `title` | cut to 250 chars, HTML-escaped |
//! | `content` | cut to 20000 chars, stored as received markup |
//!
//! Content is trusted editor output and is **not** sanitized. See [`notes::sanitize`].
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`notes`] — The note store: validation, ordering, capacity, eviction
//! - [`api`] — axum router and handlers exposing the store over HTTP
//! - [`server`] — Listener setup and graceful shutdown

pub mod api;
pub mod config;
pub mod notes;
pub mod server;
