//! Canonical product fields.
//!
//! Source files name their columns in many ways ("Product Title",
//! "brand_name", "Cost (USD)"). Every one of them is resolved onto one of
//! the fixed attributes below.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A target attribute of a [`ProductRecord`](crate::ProductRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Name,
    Brand,
    Price,
    Rating,
    Reviews,
    Category,
    SkinType,
    Concerns,
    Image,
    Description,
    Ingredients,
}

impl CanonicalField {
    /// Every field, in record order.
    pub const ALL: [CanonicalField; 11] = [
        CanonicalField::Name,
        CanonicalField::Brand,
        CanonicalField::Price,
        CanonicalField::Rating,
        CanonicalField::Reviews,
        CanonicalField::Category,
        CanonicalField::SkinType,
        CanonicalField::Concerns,
        CanonicalField::Image,
        CanonicalField::Description,
        CanonicalField::Ingredients,
    ];

    /// Returns the snake_case key used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Name => "name",
            CanonicalField::Brand => "brand",
            CanonicalField::Price => "price",
            CanonicalField::Rating => "rating",
            CanonicalField::Reviews => "reviews",
            CanonicalField::Category => "category",
            CanonicalField::SkinType => "skin_type",
            CanonicalField::Concerns => "concerns",
            CanonicalField::Image => "image",
            CanonicalField::Description => "description",
            CanonicalField::Ingredients => "ingredients",
        }
    }

    /// Returns true if a row without this field must be discarded.
    ///
    /// Only `name` is mandatory; `brand` and `category` fall back to
    /// sentinel values instead.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, CanonicalField::Name)
    }

    /// Position of this field in [`CanonicalField::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
