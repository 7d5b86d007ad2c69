//! Filtered catalog search.

use std::fmt;
use std::str::FromStr;

use lumaskin_model::ProductRecord;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::product::StoredProduct;

/// Filter value that disables a filter.
pub const ALL_FILTER: &str = "all";

/// Price buckets offered by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    /// price < 10
    #[serde(rename = "under-10")]
    Under10,
    /// 10 <= price <= 20
    #[serde(rename = "10-20")]
    From10To20,
    /// price > 20
    #[serde(rename = "over-20")]
    Over20,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Under10 => "under-10",
            PriceRange::From10To20 => "10-20",
            PriceRange::Over20 => "over-20",
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Under10 => price < 10.0,
            PriceRange::From10To20 => (10.0..=20.0).contains(&price),
            PriceRange::Over20 => price > 20.0,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(PriceRange::All),
            "under-10" => Ok(PriceRange::Under10),
            "10-20" => Ok(PriceRange::From10To20),
            "over-20" => Ok(PriceRange::Over20),
            other => Err(CatalogError::UnknownPriceRange(other.to_string())),
        }
    }
}

/// Search filters. Every set filter must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring of name or brand.
    pub text: Option<String>,
    pub category: Option<String>,
    pub skin_type: Option<String>,
    pub concern: Option<String>,
    pub price: PriceRange,
}

/// `None`, blank, and `all` all mean "no filter".
fn active(filter: Option<&str>) -> Option<&str> {
    filter
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != ALL_FILTER)
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_skin_type(mut self, skin_type: impl Into<String>) -> Self {
        self.skin_type = Some(skin_type.into());
        self
    }

    pub fn with_concern(mut self, concern: impl Into<String>) -> Self {
        self.concern = Some(concern.into());
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        if let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let needle = text.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(category) = active(self.category.as_deref())
            && product.category != category
        {
            return false;
        }
        if let Some(skin_type) = active(self.skin_type.as_deref())
            && !product.skin_type.iter().any(|s| s == skin_type)
        {
            return false;
        }
        if let Some(concern) = active(self.concern.as_deref())
            && !product.concerns.iter().any(|c| c == concern)
        {
            return false;
        }
        self.price.contains(product.price)
    }
}

/// Products matching `query`, in catalog order.
pub fn search<'a>(products: &'a [StoredProduct], query: &SearchQuery) -> Vec<&'a StoredProduct> {
    let hits: Vec<_> = products
        .iter()
        .filter(|stored| query.matches(&stored.product))
        .collect();
    tracing::debug!(total = products.len(), hits = hits.len(), "searched catalog");
    hits
}
