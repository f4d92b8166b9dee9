pub mod error;
pub mod sanitize;
pub mod store;
pub mod types;

pub use error::NoteError;
pub use store::NoteStore;
pub use types::{EvictOutcome, Note, StoreStats};
