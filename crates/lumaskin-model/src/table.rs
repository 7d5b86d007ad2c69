use serde::{Deserialize, Serialize};

/// Tokenized contents of a delimited text file.
///
/// Rows may be ragged: a row shorter than the header row reads as empty
/// strings past its end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when the header row is missing or every header is blank.
    pub fn has_blank_header(&self) -> bool {
        self.headers.iter().all(|h| h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_header() {
        assert!(RawTable::default().has_blank_header());
        assert!(RawTable::new(vec![String::new()], vec![]).has_blank_header());
        assert!(!RawTable::new(vec!["name".into()], vec![]).has_blank_header());
    }
}
