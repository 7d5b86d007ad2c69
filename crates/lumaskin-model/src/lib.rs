//! Data model shared by the LumaSkin ingestion crates.
//!
//! The types here describe every hand-off point of the product import
//! pipeline: the tokenized [`RawTable`], the [`ColumnMap`] produced by header
//! resolution, and the normalized [`ProductRecord`] handed to the store.

#![deny(unsafe_code)]

pub mod error;
pub mod field;
pub mod mapping;
pub mod prediction;
pub mod product;
pub mod table;

pub use error::{ModelError, Result};
pub use field::CanonicalField;
pub use mapping::{ColumnMap, ColumnResolution, MatchPass};
pub use prediction::{Prediction, rank_predictions};
pub use product::{DEFAULT_BRAND, DEFAULT_CATEGORY, ProductRecord};
pub use table::RawTable;
