//! Product catalog.
//!
//! Concrete [`ProductStore`](lumaskin_core::ProductStore) implementations
//! plus the read side of the catalog: filtered search, condition-based
//! recommendations, and CSV export.
//!
//! # Example
//!
//! ```ignore
//! use lumaskin_catalog::{JsonFileStore, SearchQuery, search};
//! use lumaskin_core::import_products;
//!
//! let mut store = JsonFileStore::open("catalog.json")?;
//! import_products(&bytes, &mut store)?;
//! let hits = search(store.products(), &SearchQuery::new().with_text("serum"));
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod product;
pub mod recommend;
pub mod search;
pub mod store;

pub use error::{CatalogError, Result};
pub use export::{export_csv, export_csv_file};
pub use product::{ProductId, StoredProduct, stamp_batch};
pub use recommend::{
    ConditionReport, DISCLAIMER, Guidance, RecommendOptions, SkinCondition, analyze_predictions,
    recommend, recommend_for_label,
};
pub use search::{ALL_FILTER, PriceRange, SearchQuery, search};
pub use store::{CATALOG_VERSION, CatalogDocument, JsonFileStore, MemoryStore};
