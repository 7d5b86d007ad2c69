//! Bulk-load collaborator.

use std::fmt;

use lumaskin_model::ProductRecord;
use thiserror::Error;

/// Destination of an import.
///
/// The pipeline calls [`delete_all`](ProductStore::delete_all) and then
/// [`insert_many`](ProductStore::insert_many). The two calls are not a
/// transaction: a reader between them sees an empty catalog. Callers run
/// at most one import against a store at a time.
pub trait ProductStore {
    /// Removes every stored product.
    fn delete_all(&mut self) -> Result<(), StoreError>;

    /// Inserts a batch, returning how many products were stored.
    fn insert_many(&mut self, records: &[ProductRecord]) -> Result<usize, StoreError>;
}

/// Errors reported by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store document is invalid: {0}")]
    Format(String),

    #[error("{0}")]
    Backend(String),
}

/// Which load call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStage {
    Delete,
    Insert,
}

impl StoreStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStage::Delete => "clear existing",
            StoreStage::Insert => "insert",
        }
    }
}

impl fmt::Display for StoreStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
