//! The bounded note collection.
//!
//! [`NoteStore`] is the only way to create or remove a [`Note`]. It never holds more
//! than `capacity` notes; eviction of the oldest note happens only when a caller asks
//! for it via [`NoteStore::evict_oldest_if_full`].
//!
//! The store itself is not synchronized. Callers sharing it across tasks must wrap it
//! in a mutex so the size check and the insert/remove happen under one lock.

use chrono::{DateTime, Utc};

use super::error::NoteError;
use super::sanitize::{normalize_content, normalize_title};
use super::types::{EvictOutcome, Note, StoreStats};
use crate::config::StoreConfig;

#[derive(Debug)]
pub struct NoteStore {
    notes: Vec<Note>,
    config: StoreConfig,
    next_seq: u64,
    last_created_at: Option<DateTime<Utc>>,
}

impl NoteStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            notes: Vec::with_capacity(config.capacity),
            config,
            next_seq: 0,
            last_created_at: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() >= self.config.capacity
    }

    /// All notes, newest first.
    pub fn list_notes(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| Note::chronological(b, a));
        notes
    }

    /// Validate, normalize, and store a new note.
    ///
    /// Input checks run before the capacity check, so bad input is reported as a
    /// validation error even when the store is full.
    pub fn add_note(&mut self, title: &str, content: &str) -> Result<Note, NoteError> {
        if title.is_empty() {
            return Err(NoteError::validation(
                "Title is required and must be a string",
            ));
        }
        if content.is_empty() {
            return Err(NoteError::validation(
                "Content is required and must be a string",
            ));
        }

        let title = normalize_title(title, self.config.title_max_chars);
        if title.is_empty() {
            return Err(NoteError::validation(
                "Title cannot be empty after sanitization",
            ));
        }
        let content = normalize_content(content, self.config.content_max_chars);
        if content.is_empty() {
            return Err(NoteError::validation("Content cannot be empty"));
        }

        if self.is_full() {
            tracing::debug!(capacity = self.config.capacity, "note rejected, store full");
            return Err(NoteError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let note = Note {
            id: uuid::Uuid::now_v7().to_string(),
            title,
            content,
            created_at: self.next_timestamp(),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.notes.push(note.clone());

        tracing::info!(
            id = %note.id,
            title_len = note.title.len(),
            content_len = note.content.len(),
            count = self.notes.len(),
            "note added"
        );

        Ok(note)
    }

    /// Remove the oldest note, but only when the store is at capacity.
    pub fn evict_oldest_if_full(&mut self) -> EvictOutcome {
        if self.notes.is_empty() {
            tracing::debug!("eviction skipped, store empty");
            return EvictOutcome::Empty;
        }
        if !self.is_full() {
            tracing::debug!(
                count = self.notes.len(),
                capacity = self.config.capacity,
                "eviction skipped, store below capacity"
            );
            return EvictOutcome::BelowCapacity {
                count: self.notes.len(),
                capacity: self.config.capacity,
            };
        }

        let oldest = self
            .notes
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| Note::chronological(a, b))
            .map(|(idx, _)| idx);

        match oldest {
            Some(idx) => {
                let note = self.notes.remove(idx);
                tracing::info!(id = %note.id, count = self.notes.len(), "oldest note evicted");
                EvictOutcome::Evicted(note)
            }
            None => EvictOutcome::Empty,
        }
    }

    pub fn stats(&self) -> StoreStats {
        let oldest = self.notes.iter().map(|n| n.created_at).min();
        let newest = self.notes.iter().map(|n| n.created_at).max();
        StoreStats {
            count: self.notes.len(),
            capacity: self.config.capacity,
            remaining: self.config.capacity.saturating_sub(self.notes.len()),
            oldest,
            newest,
        }
    }

    /// Current time, clamped so it never goes backwards across inserts.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(ts);
        ts
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
