//! Import failure taxonomy.

use std::fmt;

use lumaskin_ingest::DecodeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{StoreError, StoreStage};

/// Hint attached to a batch without usable rows.
pub const MISSING_COLUMNS_HINT: &str = "Ensure there are columns for product name and brand.";

/// Why an upload counts as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputReason {
    /// No non-empty line at all.
    NoLines,
    /// The header line has no non-blank field.
    BlankHeader,
    /// A header line but no data rows.
    NoDataRows,
}

impl fmt::Display for EmptyInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmptyInputReason::NoLines => "no non-empty lines",
            EmptyInputReason::BlankHeader => "header row is empty",
            EmptyInputReason::NoDataRows => "no data rows below the header",
        })
    }
}

/// What the caller needs to see when no row survived normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub detected_headers: Vec<String>,
    /// First raw data row, as tokenized.
    pub sample_row: Vec<String>,
    pub hint: String,
}

/// Fatal import errors.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not decode upload: {0}")]
    Decode(#[from] DecodeError),

    #[error("file appears to be empty or missing headers: {reason}")]
    EmptyInput { reason: EmptyInputReason },

    #[error("no valid rows found in file. {}", .0.hint)]
    NoValidRecords(Diagnostics),

    #[error("failed to {stage} products: {source}")]
    Store {
        stage: StoreStage,
        #[source]
        source: StoreError,
    },
}

impl ImportError {
    /// Stable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::Decode(_) => "decode_error",
            ImportError::EmptyInput { .. } => "empty_input",
            ImportError::NoValidRecords(_) => "no_valid_records",
            ImportError::Store { .. } => "store_error",
        }
    }

    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            ImportError::NoValidRecords(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }

    /// Structured form handed to the request boundary.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind().to_string(),
            message: self.to_string(),
            diagnostics: self.diagnostics().cloned(),
        }
    }
}

/// Serializable error kind, message, and optional diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        let empty = ImportError::EmptyInput {
            reason: EmptyInputReason::NoLines,
        };
        let none_valid = ImportError::NoValidRecords(Diagnostics {
            detected_headers: vec!["sku".to_string()],
            sample_row: vec!["123".to_string()],
            hint: MISSING_COLUMNS_HINT.to_string(),
        });
        assert_eq!(empty.kind(), "empty_input");
        assert_eq!(none_valid.kind(), "no_valid_records");
        assert!(empty.diagnostics().is_none());
        assert!(none_valid.diagnostics().is_some());
    }

    #[test]
    fn test_store_error_display() {
        let err = ImportError::Store {
            stage: StoreStage::Delete,
            source: StoreError::Backend("connection refused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to clear existing products: connection refused"
        );
    }

    #[test]
    fn test_report_serializes_without_empty_diagnostics() {
        let report = ImportError::EmptyInput {
            reason: EmptyInputReason::NoDataRows,
        }
        .report();
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["kind"], "empty_input");
        assert!(json.get("diagnostics").is_none());
    }
}
