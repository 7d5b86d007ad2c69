//! Column map produced by header resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Which resolution pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPass {
    /// Normalized header equals a known synonym.
    Exact,
    /// Normalized header contains a keyword fragment.
    Fuzzy,
}

/// A resolved column for one canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnResolution {
    /// Zero-based column index in the source file.
    pub column: usize,
    /// Header text as it appeared in the source file.
    pub header: String,
    pub pass: MatchPass,
}

/// Mapping from canonical field to source column.
///
/// Fields absent from the map are unresolved. The same column may back
/// several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    entries: BTreeMap<CanonicalField, ColumnResolution>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: CanonicalField, resolution: ColumnResolution) {
        self.entries.insert(field, resolution);
    }

    /// Column index for a field, or `None` when unresolved.
    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.entries.get(&field).map(|r| r.column)
    }

    pub fn resolution(&self, field: CanonicalField) -> Option<&ColumnResolution> {
        self.entries.get(&field)
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.entries.contains_key(&field)
    }

    /// Fields without a matching header, in record order.
    pub fn unresolved(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| !self.is_resolved(*field))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &ColumnResolution)> {
        self.entries.iter().map(|(field, r)| (*field, r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
