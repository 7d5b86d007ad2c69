//! Error types for product file ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::encoding::TextEncoding;

/// Byte sequence is not valid under the detected encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input is not valid {encoding}: malformed byte sequence")]
pub struct DecodeError {
    pub encoding: TextEncoding,
}

/// Errors that can occur while reading an upload from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Upload file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the in-memory size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
