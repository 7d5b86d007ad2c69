//! Delimited-text tokenizing.

mod fields;
mod tokenizer;

pub use fields::split_fields;
pub use tokenizer::{DELIMITER_CANDIDATES, detect_delimiter, tokenize};
