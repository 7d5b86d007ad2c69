//! Near-miss scoring for unresolved fields.
//!
//! Uses Jaro-Winkler similarity between each unused header and the
//! synonyms of an unresolved field. The result only feeds diagnostics: it
//! never changes what [`resolve_columns`](crate::resolve_columns) decided.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use lumaskin_model::{CanonicalField, ColumnMap};
use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};

use crate::rules::rules_for;
use crate::utils::normalize_header;

/// Minimum similarity for a header to be reported as a near miss.
pub const NEAR_MISS_THRESHOLD: f32 = 0.8;

/// An unused header that looks like an unresolved field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearMiss {
    pub field: CanonicalField,
    pub column: usize,
    pub header: String,
    /// Similarity in `0.0..=1.0`.
    pub similarity: f32,
}

fn best_similarity(header: &str, synonyms: &[&str]) -> f32 {
    synonyms
        .iter()
        .map(|synonym| {
            jaro_winkler::similarity(header.chars(), normalize_header(synonym).chars()) as f32
        })
        .fold(0.0, f32::max)
}

/// Suggests the closest unused header for every unresolved field.
pub fn near_misses(headers: &[String], map: &ColumnMap) -> Vec<NearMiss> {
    let used: BTreeSet<usize> = map.iter().map(|(_, r)| r.column).collect();
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    map.unresolved()
        .into_iter()
        .filter_map(|field| {
            let synonyms = rules_for(field).primary_synonyms();
            normalized
                .iter()
                .enumerate()
                .filter(|(column, header)| !used.contains(column) && !header.is_empty())
                .map(|(column, header)| (column, best_similarity(header, synonyms)))
                .filter(|(_, similarity)| *similarity >= NEAR_MISS_THRESHOLD)
                .max_by(|a, b| {
                    a.1.partial_cmp(&b.1)
                        .unwrap_or(Ordering::Equal)
                        .then_with(|| b.0.cmp(&a.0))
                })
                .map(|(column, similarity)| NearMiss {
                    field,
                    column,
                    header: headers[column].clone(),
                    similarity,
                })
        })
        .collect()
}
