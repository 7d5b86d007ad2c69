//! Value parsers shared by the coercion table.

pub mod lists;
pub mod numeric;

pub use lists::{parse_ingredients, split_list};
pub use numeric::{clean_price_text, parse_count, parse_leading_decimal};
