//! Record normalization for product imports.
//!
//! Raw cells are read through the resolved [`ColumnMap`](lumaskin_model::ColumnMap)
//! and passed through a coercion table keyed by
//! [`CanonicalField`](lumaskin_model::CanonicalField). Each coercer owns its
//! default-on-failure policy; a malformed value never aborts the batch.
//!
//! # Modules
//!
//! - [`normalization`]: Numeric and list parsers used by the coercers
//! - [`coerce`]: The per-field coercion table
//! - [`normalizer`]: Row-by-row record assembly and degradation counting

#![deny(unsafe_code)]

pub mod coerce;
pub mod normalization;
pub mod normalizer;

pub use coerce::{Coerced, Coercer, FieldValue, coercer_for, strip_enclosing_quotes};
pub use normalizer::{NormalizeStats, NormalizedBatch, normalize_records, normalize_row};
