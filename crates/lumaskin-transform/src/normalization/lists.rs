//! List-valued field parsing.

/// Splits on `|` and then on `,`, trimming and dropping empty tokens.
///
/// Handles both pipe-delimited and comma-delimited conventions, including a
/// mix of the two in one value.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split('|')
        .flat_map(|segment| segment.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Drops one leading and one trailing quote character (`'` or `"`).
fn strip_quote_marks(value: &str) -> &str {
    let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
    value.strip_suffix(['\'', '"']).unwrap_or(value)
}

/// Parses an ingredient list.
///
/// A bracketed list literal such as `['Water', 'Glycerin']` is split into
/// its items. Anything else, including a bracketed literal with no usable
/// items, becomes a single item holding the whole trimmed value, so
/// non-empty ingredient text is never lost.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(inner) = raw.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        items = inner
            .split(',')
            .map(|piece| strip_quote_marks(piece.trim()))
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect();
    }

    if items.is_empty() {
        let whole = raw.trim();
        if !whole.is_empty() {
            items.push(whole.to_string());
        }
    }
    items
}
