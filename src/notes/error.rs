use thiserror::Error;

/// Why a store operation was rejected. No rejected call changes the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// Missing, wrong-typed, or empty input.
    #[error("{0}")]
    Validation(String),

    /// The store is full; the caller should evict or upgrade.
    #[error("Maximum of {capacity} notes reached. Consider upgrading to premium to add more.")]
    CapacityExceeded { capacity: usize },
}

impl NoteError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}
