//! sc-store: local draft persistence.
//!
//! A small key-value store over a directory: one JSON document per key,
//! with the draft snapshot living under a fixed key.

pub mod store;

pub use store::{DRAFT_KEY, DraftStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
