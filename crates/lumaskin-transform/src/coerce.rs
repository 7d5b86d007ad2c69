//! Per-field coercion table.
//!
//! Every canonical field maps to one [`Coercer`]. A coercer never fails:
//! empty input yields the field's default, and malformed non-empty input
//! yields the default flagged as degraded so the caller can count it.

use lumaskin_model::{CanonicalField, DEFAULT_BRAND, DEFAULT_CATEGORY};
use serde::{Deserialize, Serialize};

use crate::normalization::{
    clean_price_text, parse_count, parse_ingredients, parse_leading_decimal, split_list,
};

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Decimal(f64),
    Count(u64),
    List(Vec<String>),
    Optional(Option<String>),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Count(_) => "count",
            FieldValue::List(_) => "list",
            FieldValue::Optional(_) => "optional",
        }
    }

    /// Reports a value read as the wrong kind. Panics in debug builds.
    fn mismatch<T: Default>(&self, expected: &'static str) -> T {
        if cfg!(debug_assertions) {
            panic!(
                "field value mismatch: expected {expected}, found {}",
                self.kind()
            );
        }
        tracing::error!(expected, found = self.kind(), "field value mismatch");
        T::default()
    }

    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Optional(text) => text.unwrap_or_default(),
            other => other.mismatch("text"),
        }
    }

    pub fn into_decimal(self) -> f64 {
        match self {
            FieldValue::Decimal(value) => value,
            other => other.mismatch("decimal"),
        }
    }

    pub fn into_count(self) -> u64 {
        match self {
            FieldValue::Count(value) => value,
            other => other.mismatch("count"),
        }
    }

    pub fn into_list(self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items,
            other => other.mismatch("list"),
        }
    }

    pub fn into_optional(self) -> Option<String> {
        match self {
            FieldValue::Optional(text) => text,
            FieldValue::Text(text) if !text.is_empty() => Some(text),
            FieldValue::Text(_) => None,
            other => other.mismatch("optional"),
        }
    }
}

/// Result of coercing one raw cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub value: FieldValue,
    /// True when non-empty input could not be parsed and the default was used.
    pub degraded: bool,
}

impl Coerced {
    fn ok(value: FieldValue) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    fn degraded(value: FieldValue) -> Self {
        Self {
            value,
            degraded: true,
        }
    }
}

/// Coercion function for one field.
pub type Coercer = fn(&str) -> Coerced;

/// Looks up the coercer for a field.
pub fn coercer_for(field: CanonicalField) -> Coercer {
    match field {
        CanonicalField::Name => coerce_text,
        CanonicalField::Brand => coerce_brand,
        CanonicalField::Category => coerce_category,
        CanonicalField::Price => coerce_price,
        CanonicalField::Rating => coerce_rating,
        CanonicalField::Reviews => coerce_reviews,
        CanonicalField::SkinType | CanonicalField::Concerns => coerce_list,
        CanonicalField::Ingredients => coerce_ingredients,
        CanonicalField::Image | CanonicalField::Description => coerce_optional,
    }
}

/// Removes one pair of enclosing double quotes, if both ends have one.
pub fn strip_enclosing_quotes(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

fn coerce_text(raw: &str) -> Coerced {
    Coerced::ok(FieldValue::Text(raw.to_string()))
}

fn text_or(raw: &str, default: &str) -> Coerced {
    if raw.is_empty() {
        Coerced::ok(FieldValue::Text(default.to_string()))
    } else {
        coerce_text(raw)
    }
}

fn coerce_brand(raw: &str) -> Coerced {
    text_or(raw, DEFAULT_BRAND)
}

fn coerce_category(raw: &str) -> Coerced {
    text_or(raw, DEFAULT_CATEGORY)
}

fn coerce_price(raw: &str) -> Coerced {
    if raw.is_empty() {
        return Coerced::ok(FieldValue::Decimal(0.0));
    }
    match parse_leading_decimal(&clean_price_text(raw)) {
        Some(price) if price >= 0.0 => Coerced::ok(FieldValue::Decimal(price)),
        _ => Coerced::degraded(FieldValue::Decimal(0.0)),
    }
}

fn coerce_rating(raw: &str) -> Coerced {
    if raw.is_empty() {
        return Coerced::ok(FieldValue::Decimal(0.0));
    }
    match parse_leading_decimal(&raw.replacen(',', ".", 1)) {
        Some(rating) => Coerced::ok(FieldValue::Decimal(rating)),
        None => Coerced::degraded(FieldValue::Decimal(0.0)),
    }
}

fn coerce_reviews(raw: &str) -> Coerced {
    if raw.is_empty() {
        return Coerced::ok(FieldValue::Count(0));
    }
    match parse_count(raw) {
        Some(count) => Coerced::ok(FieldValue::Count(count)),
        None => Coerced::degraded(FieldValue::Count(0)),
    }
}

fn coerce_list(raw: &str) -> Coerced {
    Coerced::ok(FieldValue::List(split_list(raw)))
}

fn coerce_ingredients(raw: &str) -> Coerced {
    Coerced::ok(FieldValue::List(parse_ingredients(raw)))
}

fn coerce_optional(raw: &str) -> Coerced {
    if raw.is_empty() {
        Coerced::ok(FieldValue::Optional(None))
    } else {
        Coerced::ok(FieldValue::Optional(Some(raw.to_string())))
    }
}
