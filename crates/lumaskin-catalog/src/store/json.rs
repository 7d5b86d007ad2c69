//! Catalog persisted as a JSON document.
//!
//! Every mutation rewrites the whole document with an atomic write (temp
//! file + rename), so a crash never leaves a half-written catalog behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use lumaskin_core::{ProductStore, StoreError};
use lumaskin_model::ProductRecord;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::product::{StoredProduct, stamp_batch};

/// Current catalog document schema version.
pub const CATALOG_VERSION: u32 = 1;

/// On-disk shape of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    pub products: Vec<StoredProduct>,
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            version: CATALOG_VERSION,
            products: Vec::new(),
        }
    }
}

/// A catalog backed by one JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: CatalogDocument,
}

impl JsonFileStore {
    /// Opens the catalog at `path`. A missing file is an empty catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = if path.exists() {
            load_document(&path)?
        } else {
            tracing::debug!(path = %path.display(), "catalog file not found, starting empty");
            CatalogDocument::default()
        };
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn products(&self) -> &[StoredProduct] {
        &self.document.products
    }

    pub fn len(&self) -> usize {
        self.document.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.products.is_empty()
    }

    /// Writes the current document to disk.
    pub fn save(&self) -> Result<()> {
        save_document(&self.path, &self.document)
    }

    /// Persists `document`, adopting it only once the write succeeded.
    fn replace_document(&mut self, document: CatalogDocument) -> Result<()> {
        save_document(&self.path, &document)?;
        self.document = document;
        Ok(())
    }
}

impl ProductStore for JsonFileStore {
    fn delete_all(&mut self) -> std::result::Result<(), StoreError> {
        self.replace_document(CatalogDocument::default())?;
        Ok(())
    }

    fn insert_many(&mut self, records: &[ProductRecord]) -> std::result::Result<usize, StoreError> {
        let mut products = self.document.products.clone();
        products.extend(stamp_batch(records, Utc::now()));
        self.replace_document(CatalogDocument {
            version: CATALOG_VERSION,
            products,
        })?;
        Ok(records.len())
    }
}

fn load_document(path: &Path) -> Result<CatalogDocument> {
    let bytes = fs::read(path).map_err(|e| CatalogError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let document: CatalogDocument =
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::InvalidFormat {
            path: path.to_path_buf(),
            source: e,
        })?;
    if document.version > CATALOG_VERSION {
        return Err(CatalogError::UnsupportedVersion {
            found: document.version,
            max_supported: CATALOG_VERSION,
        });
    }
    tracing::debug!(
        path = %path.display(),
        products = document.products.len(),
        "loaded catalog"
    );
    Ok(document)
}

fn save_document(path: &Path, document: &CatalogDocument) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)?;
    write_atomic(path, &bytes)?;
    tracing::debug!(
        path = %path.display(),
        products = document.products.len(),
        "saved catalog"
    );
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| CatalogError::Io {
            operation: "create directory for",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| CatalogError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(bytes).map_err(|e| CatalogError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| CatalogError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| CatalogError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
