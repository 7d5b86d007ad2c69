//! Header text normalization.

/// Normalizes a header for comparison.
///
/// Lowercases, drops a byte-order mark, and collapses every run of
/// underscores and whitespace into a single space. Other punctuation is
/// kept, so "Cost (USD)" becomes "cost (usd)".
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
