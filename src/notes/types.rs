//! Note record and the result shapes returned by the store.
//!
//! [`Note`] is only ever built by [`NoteStore::add_note`](super::store::NoteStore::add_note);
//! [`EvictOutcome`] tells a caller what an eviction request did and why.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

/// A single user-submitted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// UUID v7, assigned at creation.
    pub id: String,
    /// Plain-text title, HTML-escaped.
    pub title: String,
    /// Rich-text markup from the editor, passed through unescaped.
    pub content: String,
    /// Creation time, serialized as RFC 3339.
    pub created_at: DateTime<Utc>,
    /// Insertion counter used to break `created_at` ties.
    #[serde(skip)]
    pub(crate) seq: u64,
}

impl Note {
    /// Chronological order: earliest first, insertion order on equal timestamps.
    pub(crate) fn chronological(a: &Note, b: &Note) -> Ordering {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.seq.cmp(&b.seq))
    }
}

/// What an eviction request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvictOutcome {
    /// The store was full; this is the oldest note, now removed.
    Evicted(Note),
    /// Nothing stored, nothing to remove.
    Empty,
    /// The store still has free slots, so eviction was skipped.
    BelowCapacity { count: usize, capacity: usize },
}

impl EvictOutcome {
    pub fn evicted(&self) -> bool {
        matches!(self, Self::Evicted(_))
    }

    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Evicted(note) => Some(note),
            _ => None,
        }
    }

    /// Human-readable explanation suitable for showing to an end user.
    pub fn message(&self) -> String {
        match self {
            Self::Evicted(_) => "Premium features are not yet enabled. As a temporary measure, \
                                 the oldest note has been deleted to make space."
                .to_string(),
            Self::Empty => "No notes to delete. Add some notes first!".to_string(),
            Self::BelowCapacity { count, capacity } => format!(
                "You currently have {count} notes. Premium benefits apply when you reach \
                 the {capacity} notes limit. No action taken."
            ),
        }
    }
}

/// Read-only summary of the store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub count: usize,
    pub capacity: usize,
    pub remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest: Option<DateTime<Utc>>,
}
