//! Column resolution against the rule table.

use lumaskin_model::{CanonicalField, ColumnMap, ColumnResolution};

use crate::rules::rules_for;
use crate::utils::normalize_header;

/// Resolves one field against pre-normalized headers.
///
/// Tries the field's rules in order and returns the first match.
pub fn resolve_field(
    field: CanonicalField,
    headers: &[String],
    normalized_headers: &[String],
) -> Option<ColumnResolution> {
    rules_for(field).rules.iter().find_map(|rule| {
        rule.find(normalized_headers).map(|column| ColumnResolution {
            column,
            header: headers[column].clone(),
            pass: rule.pass(),
        })
    })
}

/// Builds the column map for a header row.
///
/// Every canonical field is searched independently over the full header
/// row, so one column may back more than one field.
pub fn resolve_columns(headers: &[String]) -> ColumnMap {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let mut map = ColumnMap::new();

    for field in CanonicalField::ALL {
        match resolve_field(field, headers, &normalized) {
            Some(resolution) => {
                tracing::debug!(
                    field = %field,
                    column = resolution.column,
                    header = %resolution.header,
                    pass = ?resolution.pass,
                    "resolved column"
                );
                map.insert(field, resolution);
            }
            None => {
                tracing::debug!(field = %field, "no header matched");
            }
        }
    }

    tracing::info!(
        resolved = map.len(),
        unresolved = CanonicalField::ALL.len() - map.len(),
        "resolved header row"
    );
    map
}
