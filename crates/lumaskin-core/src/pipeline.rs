//! Import pipeline stages.
//!
//! # Stage Order
//!
//! 1. **Decode** - BOM-based encoding detection, strict decoding
//! 2. **Tokenize** - Delimiter detection and quote-aware field splitting
//! 3. **Resolve** - Header row to canonical field column map
//! 4. **Normalize** - Per-field coercion, rows without a name dropped
//! 5. **Load** - `delete_all` then `insert_many` on the injected store
//!
//! Stages 1-4 are pure; running them twice on the same bytes yields the
//! same records.

use lumaskin_ingest::{TextEncoding, decode, tokenize};
use lumaskin_map::{NearMiss, near_misses, resolve_columns};
use lumaskin_model::{ColumnMap, ProductRecord, RawTable};
use lumaskin_transform::{NormalizeStats, normalize_records};

use crate::error::{Diagnostics, EmptyInputReason, ImportError, MISSING_COLUMNS_HINT, Result};
use crate::store::{ProductStore, StoreStage};

/// Everything the pure stages produced for one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub encoding: TextEncoding,
    pub headers: Vec<String>,
    pub column_map: ColumnMap,
    /// Unused headers resembling unresolved fields.
    pub near_misses: Vec<NearMiss>,
    pub records: Vec<ProductRecord>,
    pub stats: NormalizeStats,
}

/// Result of a completed import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub encoding: TextEncoding,
    pub column_map: ColumnMap,
    pub stats: NormalizeStats,
    pub inserted: usize,
}

fn check_table(table: &RawTable) -> Result<()> {
    let reason = if table.headers.is_empty() {
        Some(EmptyInputReason::NoLines)
    } else if table.has_blank_header() {
        Some(EmptyInputReason::BlankHeader)
    } else if table.rows.is_empty() {
        Some(EmptyInputReason::NoDataRows)
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ImportError::EmptyInput { reason }),
        None => Ok(()),
    }
}

/// Runs the pure stages: bytes in, validated records out.
///
/// # Errors
///
/// - [`ImportError::Decode`] when the bytes are malformed for their encoding
/// - [`ImportError::EmptyInput`] when there is no header or no data row
/// - [`ImportError::NoValidRecords`] when rows exist but none has a name
pub fn parse_products(bytes: &[u8]) -> Result<ImportOutcome> {
    let _span = tracing::info_span!("parse_products", bytes = bytes.len()).entered();

    let decoded = decode(bytes)?;
    let table = tokenize(&decoded.text);
    check_table(&table)?;

    let column_map = resolve_columns(&table.headers);
    let near_misses = near_misses(&table.headers, &column_map);
    for miss in &near_misses {
        tracing::warn!(
            field = %miss.field,
            header = %miss.header,
            similarity = miss.similarity,
            "unresolved field has a similar header"
        );
    }

    let batch = normalize_records(&table, &column_map);
    if batch.records.is_empty() {
        return Err(ImportError::NoValidRecords(Diagnostics {
            detected_headers: table.headers.clone(),
            sample_row: table.rows.first().cloned().unwrap_or_default(),
            hint: MISSING_COLUMNS_HINT.to_string(),
        }));
    }

    tracing::info!(
        encoding = %decoded.encoding,
        rows = batch.stats.rows_seen,
        records = batch.records.len(),
        "parsed product file"
    );

    Ok(ImportOutcome {
        encoding: decoded.encoding,
        headers: table.headers,
        column_map,
        near_misses,
        records: batch.records,
        stats: batch.stats,
    })
}

/// Replaces the store contents with `records`.
///
/// Deletes first, then inserts. Either failure aborts without retry; a
/// failed insert leaves the store empty.
pub fn load_records<S>(store: &mut S, records: &[ProductRecord]) -> Result<usize>
where
    S: ProductStore + ?Sized,
{
    let _span = tracing::info_span!("load_records", records = records.len()).entered();

    tracing::info!("clearing existing products");
    store.delete_all().map_err(|source| {
        tracing::error!(error = %source, "failed to clear products");
        ImportError::Store {
            stage: StoreStage::Delete,
            source,
        }
    })?;

    tracing::info!("inserting new products");
    let inserted = store.insert_many(records).map_err(|source| {
        tracing::error!(error = %source, "failed to insert products");
        ImportError::Store {
            stage: StoreStage::Insert,
            source,
        }
    })?;

    Ok(inserted)
}

/// Parses an upload and replaces the store contents with its records.
pub fn import_products<S>(bytes: &[u8], store: &mut S) -> Result<ImportSummary>
where
    S: ProductStore + ?Sized,
{
    let outcome = parse_products(bytes)?;
    let inserted = load_records(store, &outcome.records)?;
    tracing::info!(inserted, "products imported");

    Ok(ImportSummary {
        encoding: outcome.encoding,
        column_map: outcome.column_map,
        stats: outcome.stats,
        inserted,
    })
}
