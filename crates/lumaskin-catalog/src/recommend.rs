//! Condition-based product recommendations.
//!
//! A skin-condition label (as produced by the external image model) maps to
//! a list of target ingredients. Products containing any of them are ranked
//! by rating.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lumaskin_model::{Prediction, rank_predictions};
use serde::{Deserialize, Serialize};

use crate::product::StoredProduct;

/// Shown alongside every analysis result.
pub const DISCLAIMER: &str =
    "This is not a medical diagnosis. Consult a dermatologist for concerns.";

/// Conditions the image model can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinCondition {
    Acne,
    Dryness,
    OilySkin,
    Rosacea,
    WrinklesFineLines,
    DarkCirclesPuffiness,
    Normal,
}

/// Care guidance for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub summary: &'static str,
    pub routine: &'static str,
    pub key_ingredients: &'static str,
}

impl SkinCondition {
    pub const ALL: [SkinCondition; 7] = [
        SkinCondition::Acne,
        SkinCondition::Dryness,
        SkinCondition::OilySkin,
        SkinCondition::Rosacea,
        SkinCondition::WrinklesFineLines,
        SkinCondition::DarkCirclesPuffiness,
        SkinCondition::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinCondition::Acne => "acne",
            SkinCondition::Dryness => "dryness",
            SkinCondition::OilySkin => "oily_skin",
            SkinCondition::Rosacea => "rosacea",
            SkinCondition::WrinklesFineLines => "wrinkles_fine_lines",
            SkinCondition::DarkCirclesPuffiness => "dark_circles_puffiness",
            SkinCondition::Normal => "normal",
        }
    }

    /// Ingredients a matching product should contain (lowercase).
    pub fn target_ingredients(&self) -> &'static [&'static str] {
        match self {
            SkinCondition::Acne => &[
                "salicylic acid",
                "niacinamide",
                "benzoyl peroxide",
                "adapalene",
                "azelaic acid",
            ],
            SkinCondition::Dryness => &[
                "hyaluronic acid",
                "ceramides",
                "glycerin",
                "squalane",
                "shea butter",
            ],
            SkinCondition::OilySkin => &[
                "niacinamide",
                "salicylic acid",
                "zinc pca",
                "tea tree oil",
                "kaolin clay",
            ],
            SkinCondition::Rosacea => &[
                "azelaic acid",
                "niacinamide",
                "allantoin",
                "panthenol",
                "centella asiatica",
            ],
            SkinCondition::WrinklesFineLines => &[
                "retinoids",
                "vitamin c",
                "peptides",
                "hyaluronic acid",
                "niacinamide",
            ],
            SkinCondition::DarkCirclesPuffiness => &[
                "caffeine",
                "vitamin k",
                "retinoids",
                "peptides",
                "hyaluronic acid",
            ],
            SkinCondition::Normal => &["glycerin", "hyaluronic acid", "ceramides"],
        }
    }

    pub fn guidance(&self) -> &'static Guidance {
        match self {
            SkinCondition::Acne => &Guidance {
                summary: "Support gentle sebum control, reduce inflammation, avoid pore-clogging.",
                routine: "AM: Cleanser (salicylic acid 0.5-2%), Niacinamide serum (4-10%), Oil-free moisturizer, Broad-spectrum SPF 50.\nPM: Gentle cleanser, Adapalene 0.1% or Benzoyl Peroxide 2.5%, Non-comedogenic moisturizer.",
                key_ingredients: "Salicylic acid, Niacinamide, Benzoyl Peroxide, Adapalene (retinoid), Azelaic acid",
            },
            SkinCondition::Dryness => &Guidance {
                summary: "Rebuild moisture barrier and prevent water loss.",
                routine: "AM: Gentle creamy cleanser, Hyaluronic acid serum, Rich moisturizer with ceramides, SPF.\nPM: Gentle cleanser, Occlusive moisturizer or facial oil, Consider humidifier.",
                key_ingredients: "Hyaluronic acid, Ceramides, Glycerin, Squalane, Shea butter, Petrolatum",
            },
            SkinCondition::OilySkin => &Guidance {
                summary: "Balance sebum production without over-drying.",
                routine: "AM: Gel cleanser, Niacinamide serum, Oil-free moisturizer, Mattifying SPF.\nPM: Gentle cleanser, Clay mask (1-2x/week), Lightweight moisturizer.",
                key_ingredients: "Niacinamide, Salicylic acid, Zinc PCA, Tea tree oil, Kaolin clay",
            },
            SkinCondition::Rosacea => &Guidance {
                summary: "Soothe redness, avoid triggers, strengthen barrier.",
                routine: "AM: Gentle cleanser, Azelaic acid 10%, Lightweight moisturizer, Mineral SPF.\nPM: Gentle cleanser, Niacinamide 5%, Barrier cream.",
                key_ingredients: "Azelaic acid, Niacinamide, Allantoin, Panthenol, Centella asiatica",
            },
            SkinCondition::WrinklesFineLines => &Guidance {
                summary: "Stimulate collagen, protect from further damage.",
                routine: "AM: Gentle cleanser, Vitamin C serum, Peptide serum, Moisturizer, SPF 50.\nPM: Gentle cleanser, Retinoid (start low), Peptide moisturizer, Eye cream.",
                key_ingredients: "Retinoids, Vitamin C, Peptides, Hyaluronic acid, Niacinamide, CoQ10",
            },
            SkinCondition::DarkCirclesPuffiness => &Guidance {
                summary: "Target under-eye concerns with gentle, targeted care.",
                routine: "AM: Gentle cleanser, Caffeine serum under eyes, Moisturizer, SPF.\nPM: Gentle cleanser, Retinol eye cream (low concentration), Eye cream with peptides.",
                key_ingredients: "Caffeine, Vitamin K, Retinoids, Peptides, Hyaluronic acid, Niacinamide",
            },
            SkinCondition::Normal => &Guidance {
                summary: "Maintain healthy barrier and consistent sunscreen.",
                routine: "AM: Gentle cleanser, Lightweight moisturizer, SPF 50.\nPM: Gentle cleanser, Moisturizer.",
                key_ingredients: "Glycerin, Hyaluronic acid, Ceramides",
            },
        }
    }
}

impl fmt::Display for SkinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SkinCondition::ALL
            .into_iter()
            .find(|condition| condition.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown skin condition '{wanted}'"))
    }
}

/// Limits for recommendation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendOptions {
    /// Products returned per condition.
    pub limit: usize,
    /// Predictions considered per analysis.
    pub top_k: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self { limit: 3, top_k: 3 }
    }
}

/// Products for `condition`, best rated first.
///
/// A product qualifies when its ingredient list contains any target
/// ingredient (case-insensitive, whole item). Equal ratings keep catalog
/// order.
pub fn recommend<'a>(
    products: &'a [StoredProduct],
    condition: SkinCondition,
    options: &RecommendOptions,
) -> Vec<&'a StoredProduct> {
    let targets = condition.target_ingredients();
    let mut matches: Vec<&StoredProduct> = products
        .iter()
        .filter(|stored| targets.iter().any(|t| stored.product.has_ingredient(t)))
        .collect();
    matches.sort_by(|a, b| {
        b.product
            .rating
            .partial_cmp(&a.product.rating)
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(options.limit);
    tracing::debug!(%condition, hits = matches.len(), "recommended products");
    matches
}

/// Like [`recommend`], for a raw label. Unknown labels yield nothing.
pub fn recommend_for_label<'a>(
    products: &'a [StoredProduct],
    label: &str,
    options: &RecommendOptions,
) -> Vec<&'a StoredProduct> {
    match label.parse::<SkinCondition>() {
        Ok(condition) => recommend(products, condition, options),
        Err(_) => {
            tracing::debug!(label, "no ingredient targets for label");
            Vec::new()
        }
    }
}

/// One ranked prediction with its recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionReport {
    #[serde(flatten)]
    pub prediction: Prediction,
    pub guidance: Option<&'static Guidance>,
    pub products: Vec<StoredProduct>,
}

/// Ranks model predictions and attaches guidance and products to each.
pub fn analyze_predictions(
    products: &[StoredProduct],
    predictions: Vec<Prediction>,
    options: &RecommendOptions,
) -> Vec<ConditionReport> {
    rank_predictions(predictions, options.top_k)
        .into_iter()
        .map(|prediction| {
            let guidance = prediction
                .label
                .parse::<SkinCondition>()
                .ok()
                .map(|condition| condition.guidance());
            let products = recommend_for_label(products, &prediction.label, options)
                .into_iter()
                .cloned()
                .collect();
            ConditionReport {
                prediction,
                guidance,
                products,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lumaskin_model::ProductRecord;

    fn stored(name: &str, rating: f64, ingredients: &[&str]) -> StoredProduct {
        let mut record = ProductRecord::new(name, "Acme").unwrap();
        record.rating = rating;
        record.ingredients = ingredients.iter().map(|s| (*s).to_string()).collect();
        StoredProduct::new(record, Utc::now())
    }

    #[test]
    fn test_condition_labels_roundtrip() {
        for condition in SkinCondition::ALL {
            assert_eq!(condition.as_str().parse::<SkinCondition>(), Ok(condition));
        }
        assert!("eczema".parse::<SkinCondition>().is_err());
    }

    #[test]
    fn test_recommend_orders_by_rating_and_limits() {
        let catalog = vec![
            stored("Low", 3.0, &["Niacinamide"]),
            stored("None", 5.0, &["Water"]),
            stored("High", 4.8, &["Salicylic Acid", "Water"]),
            stored("Mid", 4.1, &["azelaic acid"]),
            stored("Mid Too", 4.1, &["Adapalene"]),
        ];
        let hits = recommend(&catalog, SkinCondition::Acne, &RecommendOptions::default());
        let names: Vec<_> = hits.iter().map(|s| s.product.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Mid Too"]);
    }

    #[test]
    fn test_unknown_label_yields_nothing() {
        let catalog = vec![stored("Any", 4.0, &["Glycerin"])];
        assert!(recommend_for_label(&catalog, "sunburn", &RecommendOptions::default()).is_empty());
    }

    #[test]
    fn test_analyze_predictions() {
        let catalog = vec![stored("Cream", 4.0, &["Ceramides"])];
        let reports = analyze_predictions(
            &catalog,
            vec![
                Prediction::new("acne", 0.2),
                Prediction::new("dryness", 0.7),
                Prediction::new("mystery", 0.1),
                Prediction::new("normal", 0.05),
            ],
            &RecommendOptions::default(),
        );
        let labels: Vec<_> = reports.iter().map(|r| r.prediction.label.as_str()).collect();
        assert_eq!(labels, vec!["dryness", "acne", "mystery"]);
        assert_eq!(reports[0].products.len(), 1);
        assert!(reports[1].products.is_empty());
        assert!(reports[2].guidance.is_none());
    }
}
