//! Normalized product records.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Brand used when the source row has none.
pub const DEFAULT_BRAND: &str = "Unknown";
/// Category used when the source row has none.
pub const DEFAULT_CATEGORY: &str = "Other";

/// One validated product, ready for bulk load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: u64,
    pub category: String,
    pub skin_type: Vec<String>,
    pub concerns: Vec<String>,
    /// `None` when the source had no image, as opposed to an empty one.
    pub image: Option<String>,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
}

impl ProductRecord {
    /// Creates a record with defaults for everything but name and brand.
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        let brand = brand.into();
        Ok(Self {
            name,
            brand: if brand.is_empty() {
                DEFAULT_BRAND.to_string()
            } else {
                brand
            },
            price: 0.0,
            rating: 0.0,
            reviews: 0,
            category: DEFAULT_CATEGORY.to_string(),
            skin_type: Vec::new(),
            concerns: Vec::new(),
            image: None,
            description: None,
            ingredients: Vec::new(),
        })
    }

    /// Case-insensitive ingredient membership test.
    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.eq_ignore_ascii_case(ingredient))
    }
}
