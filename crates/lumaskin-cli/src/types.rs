use std::path::PathBuf;

use lumaskin_core::ImportOutcome;
use lumaskin_ingest::TextEncoding;
use lumaskin_map::NearMiss;
use lumaskin_model::{ColumnMap, Prediction, ProductRecord};
use lumaskin_transform::NormalizeStats;
use serde::Deserialize;

#[derive(Debug)]
pub struct ImportResult {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub store: Option<PathBuf>,
    pub encoding: TextEncoding,
    pub headers: Vec<String>,
    pub column_map: ColumnMap,
    pub near_misses: Vec<NearMiss>,
    pub stats: NormalizeStats,
    pub inserted: Option<usize>,
}

#[derive(Debug)]
pub struct InspectResult {
    pub input: PathBuf,
    pub outcome: ImportOutcome,
}

impl InspectResult {
    pub fn preview(&self, count: usize) -> &[ProductRecord] {
        let end = count.min(self.outcome.records.len());
        &self.outcome.records[..end]
    }
}

/// Prediction files come either bare or wrapped the way the model endpoint
/// responds.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictionFile {
    Wrapped { predictions: Vec<Prediction> },
    Bare(Vec<Prediction>),
}

impl PredictionFile {
    pub fn into_predictions(self) -> Vec<Prediction> {
        match self {
            PredictionFile::Wrapped { predictions } | PredictionFile::Bare(predictions) => {
                predictions
            }
        }
    }
}
