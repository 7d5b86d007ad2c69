//! Line splitting, delimiter detection, and table assembly.

use lumaskin_model::RawTable;

use super::fields::split_fields;

/// Delimiters tried against the header line, in priority order.
pub const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

const BOM: char = '\u{feff}';

/// Picks the first candidate delimiter present in the header line.
///
/// Falls back to a comma, so single-column files still tokenize
/// deterministically.
pub fn detect_delimiter(header_line: &str) -> char {
    DELIMITER_CANDIDATES
        .into_iter()
        .find(|candidate| header_line.contains(*candidate))
        .unwrap_or(',')
}

/// Splits text on `\r?\n` and drops zero-length lines.
///
/// A line holding only whitespace is not empty and is kept.
fn non_empty_lines(text: &str) -> Vec<&str> {
    let pieces: Vec<&str> = text.split('\n').collect();
    let last = pieces.len().saturating_sub(1);
    pieces
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i < last {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Tokenizes decoded text into a header row and data rows.
///
/// Records are single-line: a quoted field never continues onto the next
/// line. Text without any non-empty line yields an empty table, which the
/// caller must report as "no data".
pub fn tokenize(text: &str) -> RawTable {
    let lines = non_empty_lines(text);
    let Some((header_line, data_lines)) = lines.split_first() else {
        tracing::debug!("no non-empty lines in input");
        return RawTable::default();
    };

    let delimiter = detect_delimiter(header_line);
    let mut headers = split_fields(header_line, delimiter);
    if let Some(first) = headers.first_mut()
        && let Some(stripped) = first.strip_prefix(BOM)
    {
        *first = stripped.to_string();
    }

    let rows: Vec<Vec<String>> = data_lines
        .iter()
        .map(|line| split_fields(line, delimiter))
        .collect();

    tracing::debug!(
        delimiter = ?delimiter,
        columns = headers.len(),
        rows = rows.len(),
        "tokenized input"
    );

    RawTable::new(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_priority() {
        assert_eq!(detect_delimiter("name;brand,price"), ',');
        assert_eq!(detect_delimiter("name;brand\tprice"), ';');
        assert_eq!(detect_delimiter("name\tbrand|price"), '\t');
        assert_eq!(detect_delimiter("name|brand"), '|');
        assert_eq!(detect_delimiter("name"), ',');
    }

    #[test]
    fn test_tokenize_basic() {
        let table = tokenize("Name,Brand\nSerum,Acme\nToner,Glow\n");
        assert_eq!(table.headers, vec!["Name", "Brand"]);
        assert_eq!(table.rows, vec![vec!["Serum", "Acme"], vec!["Toner", "Glow"]]);
    }

    #[test]
    fn test_tokenize_crlf_and_blank_lines() {
        let table = tokenize("Name;Brand\r\n\r\nSerum;Acme\r\n\nToner;Glow");
        assert_eq!(table.headers, vec!["Name", "Brand"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Toner", "Glow"]);
    }

    #[test]
    fn test_tokenize_whitespace_line_is_a_row() {
        let table = tokenize("Name\n   \nSerum");
        assert_eq!(table.rows, vec![vec![""], vec!["Serum"]]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert_eq!(tokenize(""), RawTable::default());
        assert_eq!(tokenize("\n\r\n\n"), RawTable::default());
    }

    #[test]
    fn test_tokenize_header_only() {
        let table = tokenize("Name,Brand\n");
        assert_eq!(table.headers.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_tokenize_strips_bom_from_first_header() {
        let table = tokenize("\u{feff}Name,Brand\nSerum,Acme");
        assert_eq!(table.headers[0], "Name");
        let table = tokenize("  \u{feff}Name,Brand");
        assert_eq!(table.headers[0], "Name");
    }

    #[test]
    fn test_tokenize_ragged_rows_kept_as_is() {
        let table = tokenize("a,b,c\n1\n1,2,3,4");
        assert_eq!(table.rows[0], vec!["1"]);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_tokenize_uses_header_delimiter_for_rows() {
        let table = tokenize("Name\tPrice\nSerum, large\t12,50");
        assert_eq!(table.rows[0], vec!["Serum, large", "12,50"]);
    }
}
