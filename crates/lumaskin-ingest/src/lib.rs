//! Product file ingestion.
//!
//! This crate turns the raw bytes of an uploaded product file into a
//! [`RawTable`]: the byte-order mark decides the text encoding, the header
//! line decides the field delimiter, and a quote-aware scanner splits every
//! line into trimmed fields.
//!
//! # Example
//!
//! ```ignore
//! use lumaskin_ingest::{decode, tokenize};
//!
//! let decoded = decode(&bytes)?;
//! let table = tokenize(&decoded.text);
//! ```

mod csv;
mod encoding;
mod error;
mod upload;

// === Error Types ===
pub use error::{DecodeError, IngestError, Result};

// === Decoding ===
pub use encoding::{DecodedText, TextEncoding, decode, detect_encoding};

// === Tokenizing ===
pub use csv::{DELIMITER_CANDIDATES, detect_delimiter, split_fields, tokenize};

// === Upload Reading ===
pub use upload::{MAX_UPLOAD_SIZE, read_upload, read_upload_with_limit};

pub use lumaskin_model::RawTable;
