//! Header resolution for product imports.
//!
//! Each canonical field owns an ordered list of match rules (exact synonyms
//! first, keyword containment second). Rules are tried in order against the
//! normalized header row and the first hit wins. Fields are resolved
//! independently of one another.

#![deny(unsafe_code)]

mod resolver;
mod rules;
mod score;
mod utils;

pub use resolver::{resolve_columns, resolve_field};
pub use rules::{FIELD_RULES, FieldRules, MatchRule, rules_for};
pub use score::{NEAR_MISS_THRESHOLD, NearMiss, near_misses};
pub use utils::normalize_header;
