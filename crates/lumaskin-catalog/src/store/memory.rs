//! In-memory catalog.

use chrono::Utc;
use lumaskin_core::{ProductStore, StoreError};
use lumaskin_model::ProductRecord;

use crate::product::{StoredProduct, stamp_batch};

/// A catalog held in memory, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<StoredProduct>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[StoredProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductStore for MemoryStore {
    fn delete_all(&mut self) -> Result<(), StoreError> {
        self.products.clear();
        Ok(())
    }

    fn insert_many(&mut self, records: &[ProductRecord]) -> Result<usize, StoreError> {
        self.products.extend(stamp_batch(records, Utc::now()));
        Ok(records.len())
    }
}
