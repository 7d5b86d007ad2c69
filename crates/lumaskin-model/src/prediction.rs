//! Skin-condition predictions returned by the external model endpoint.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single `{label, confidence}` prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Keeps the `top_k` most confident predictions, highest first.
///
/// Ties keep their original order.
pub fn rank_predictions(mut predictions: Vec<Prediction>, top_k: usize) -> Vec<Prediction> {
    predictions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    predictions.truncate(top_k);
    predictions
}
