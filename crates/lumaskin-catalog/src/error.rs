//! Catalog error types.

use std::path::PathBuf;

use lumaskin_core::StoreError;
use thiserror::Error;

/// Catalog operation error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error.
    #[error("failed to {operation} catalog file: {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON for this schema.
    #[error("invalid catalog document {}: {source}", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document was written by a newer version.
    #[error("catalog version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    /// Temp file could not be renamed over the target.
    #[error("failed to replace catalog file {}", target_path.display())]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write CSV export: {0}")]
    Export(#[from] csv::Error),

    #[error("unknown price range '{0}' (expected all, under-10, 10-20, over-20)")]
    UnknownPriceRange(String),
}

impl From<CatalogError> for StoreError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Io { source, .. } | CatalogError::AtomicWriteFailed { source, .. } => {
                StoreError::Io(source)
            }
            CatalogError::InvalidFormat { .. }
            | CatalogError::UnsupportedVersion { .. }
            | CatalogError::Serialization(_) => StoreError::Format(error.to_string()),
            CatalogError::Export(_) | CatalogError::UnknownPriceRange(_) => {
                StoreError::Backend(error.to_string())
            }
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
