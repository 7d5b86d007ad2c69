//! Quote-aware field splitting for a single line.

/// Trims a field value.
fn normalize_field(value: &str) -> String {
    value.trim().to_string()
}

/// Splits one line into trimmed fields.
///
/// A `"` toggles the quoted state; inside a quoted span `""` is a literal
/// quote and the delimiter is ordinary text. The last field is always
/// flushed, so a line with N unquoted delimiters yields N+1 fields.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => {
                in_quotes = !in_quotes;
            }
            c if c == delimiter && !in_quotes => {
                fields.push(normalize_field(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_field(&current));
    fields
}
