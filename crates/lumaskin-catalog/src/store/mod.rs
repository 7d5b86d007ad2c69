//! Catalog stores implementing the import load step.

mod json;
mod memory;

pub use json::{CATALOG_VERSION, CatalogDocument, JsonFileStore};
pub use memory::MemoryStore;
