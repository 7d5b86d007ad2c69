//! Product import pipeline.
//!
//! Raw bytes go through four pure stages (decode, tokenize, resolve
//! headers, normalize records) and the resulting batch replaces the
//! contents of an injected [`ProductStore`].
//!
//! # Example
//!
//! ```ignore
//! use lumaskin_core::{import_products, parse_products};
//!
//! // Pure: bytes in, records out.
//! let outcome = parse_products(&bytes)?;
//!
//! // With load: delete everything, then insert the new batch.
//! let summary = import_products(&bytes, &mut store)?;
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod store;

pub use error::{Diagnostics, EmptyInputReason, ErrorReport, ImportError, MISSING_COLUMNS_HINT, Result};
pub use pipeline::{ImportOutcome, ImportSummary, import_products, load_records, parse_products};
pub use store::{ProductStore, StoreError, StoreStage};
