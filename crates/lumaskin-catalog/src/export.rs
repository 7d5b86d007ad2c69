//! CSV export in a shape the import pipeline reads back.
//!
//! Headers are the canonical field names. List fields are pipe-joined.
//! Ingredients are written as a bracketed list literal, except a single
//! free-text entry, which is written as-is so it re-imports unsplit.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lumaskin_model::{CanonicalField, ProductRecord};

use crate::error::{CatalogError, Result};
use crate::product::StoredProduct;

fn ingredients_cell(ingredients: &[String]) -> String {
    match ingredients {
        [] => String::new(),
        [single] if !(single.starts_with('[') && single.ends_with(']')) => single.clone(),
        items => {
            let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
            format!("[{}]", quoted.join(", "))
        }
    }
}

fn record_cells(record: &ProductRecord) -> [String; 11] {
    [
        record.name.clone(),
        record.brand.clone(),
        record.price.to_string(),
        record.rating.to_string(),
        record.reviews.to_string(),
        record.category.clone(),
        record.skin_type.join("|"),
        record.concerns.join("|"),
        record.image.clone().unwrap_or_default(),
        record.description.clone().unwrap_or_default(),
        ingredients_cell(&record.ingredients),
    ]
}

/// Writes the catalog as CSV. Returns the number of data rows.
pub fn export_csv<W: Write>(products: &[StoredProduct], writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CanonicalField::ALL.iter().map(CanonicalField::as_str))?;
    for stored in products {
        csv_writer.write_record(&record_cells(&stored.product))?;
    }
    csv_writer
        .flush()
        .map_err(|e| CatalogError::Export(e.into()))?;

    tracing::info!(rows = products.len(), "exported catalog");
    Ok(products.len())
}

/// Writes the catalog to a CSV file at `path`.
pub fn export_csv_file(products: &[StoredProduct], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|e| CatalogError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;
    export_csv(products, file)
}
