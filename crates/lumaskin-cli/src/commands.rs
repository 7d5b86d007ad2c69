//! Command implementations, independent of argument parsing and printing.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use lumaskin_catalog::{
    ConditionReport, JsonFileStore, RecommendOptions, SearchQuery, SkinCondition, StoredProduct,
    analyze_predictions, export_csv, export_csv_file, recommend_for_label, search,
};
use lumaskin_core::{load_records, parse_products};
use lumaskin_ingest::read_upload;
use tracing::{info, info_span, trace, warn};

use crate::logging::redact_value;
use crate::types::{ImportResult, InspectResult, PredictionFile};

fn open_store(path: &Path) -> Result<JsonFileStore> {
    JsonFileStore::open(path).with_context(|| format!("open catalog {}", path.display()))
}

/// Imports `input` into the catalog at `store`, or only parses it when
/// `dry_run` is set.
pub fn run_import(input: &Path, store: &Path, dry_run: bool) -> Result<ImportResult> {
    let span = info_span!("import", input = %input.display(), dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let bytes = read_upload(input)?;
    let outcome = parse_products(&bytes)?;
    for record in &outcome.records {
        trace!(
            name = %redact_value(&record.name),
            brand = %redact_value(&record.brand),
            "parsed product"
        );
    }

    let inserted = if dry_run {
        info!(records = outcome.records.len(), "dry run, catalog untouched");
        None
    } else {
        let mut catalog = open_store(store)?;
        Some(load_records(&mut catalog, &outcome.records)?)
    };

    info!(
        records = outcome.records.len(),
        dropped = outcome.stats.rows_dropped,
        duration_ms = start.elapsed().as_millis(),
        "import complete"
    );

    Ok(ImportResult {
        input: input.to_path_buf(),
        store: (!dry_run).then(|| store.to_path_buf()),
        encoding: outcome.encoding,
        headers: outcome.headers,
        column_map: outcome.column_map,
        near_misses: outcome.near_misses,
        stats: outcome.stats,
        inserted,
    })
}

pub fn run_inspect(input: &Path) -> Result<InspectResult> {
    let bytes = read_upload(input)?;
    let outcome = parse_products(&bytes)?;
    Ok(InspectResult {
        input: input.to_path_buf(),
        outcome,
    })
}

pub fn run_search(store: &Path, query: &SearchQuery) -> Result<Vec<StoredProduct>> {
    let catalog = open_store(store)?;
    if catalog.is_empty() {
        warn!(store = %store.display(), "catalog is empty");
    }
    Ok(search(catalog.products(), query)
        .into_iter()
        .cloned()
        .collect())
}

pub fn run_recommend(
    store: &Path,
    condition: &str,
    options: &RecommendOptions,
) -> Result<Vec<StoredProduct>> {
    let catalog = open_store(store)?;
    if condition.parse::<SkinCondition>().is_err() {
        warn!(condition, "unknown condition, no ingredient targets");
    }
    Ok(recommend_for_label(catalog.products(), condition, options)
        .into_iter()
        .cloned()
        .collect())
}

pub fn run_analyze(
    store: &Path,
    predictions: &Path,
    options: &RecommendOptions,
) -> Result<Vec<ConditionReport>> {
    let text = std::fs::read_to_string(predictions)
        .with_context(|| format!("read predictions {}", predictions.display()))?;
    let parsed: PredictionFile = serde_json::from_str(&text)
        .with_context(|| format!("parse predictions {}", predictions.display()))?;
    let catalog = open_store(store)?;
    Ok(analyze_predictions(
        catalog.products(),
        parsed.into_predictions(),
        options,
    ))
}

/// Writes the catalog as CSV to `output`, or to `stdout` when `None`.
pub fn run_export<W: Write>(store: &Path, output: Option<&Path>, stdout: W) -> Result<usize> {
    let catalog = open_store(store)?;
    let rows = match output {
        Some(path) => export_csv_file(catalog.products(), path)
            .with_context(|| format!("export to {}", path.display()))?,
        None => export_csv(catalog.products(), stdout).context("export to stdout")?,
    };
    Ok(rows)
}
