//! Per-field resolution rules.

use lumaskin_model::{CanonicalField, MatchPass};

use crate::utils::normalize_header;

/// A single way of locating a field's column.
#[derive(Debug, Clone, Copy)]
pub enum MatchRule {
    /// Normalized header equals one of the synonyms.
    Exact(&'static [&'static str]),
    /// Normalized header contains one of the keyword fragments.
    Contains(&'static [&'static str]),
}

impl MatchRule {
    pub fn pass(&self) -> MatchPass {
        match self {
            MatchRule::Exact(_) => MatchPass::Exact,
            MatchRule::Contains(_) => MatchPass::Fuzzy,
        }
    }

    /// Leftmost normalized header satisfying this rule.
    pub fn find(&self, normalized_headers: &[String]) -> Option<usize> {
        match self {
            MatchRule::Exact(synonyms) => {
                let synonyms: Vec<String> = synonyms.iter().map(|s| normalize_header(s)).collect();
                normalized_headers
                    .iter()
                    .position(|header| synonyms.contains(header))
            }
            MatchRule::Contains(keywords) => normalized_headers.iter().position(|header| {
                keywords
                    .iter()
                    .any(|keyword| header.contains(keyword))
            }),
        }
    }
}

/// Ordered rules for one canonical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: CanonicalField,
    pub rules: &'static [MatchRule],
}

impl FieldRules {
    /// Synonyms of the first exact rule, used for near-miss scoring.
    pub fn primary_synonyms(&self) -> &'static [&'static str] {
        self.rules
            .iter()
            .find_map(|rule| match rule {
                MatchRule::Exact(synonyms) => Some(*synonyms),
                MatchRule::Contains(_) => None,
            })
            .unwrap_or(&[])
    }
}

/// Resolution rules, one entry per canonical field in record order.
pub static FIELD_RULES: [FieldRules; 11] = [
    FieldRules {
        field: CanonicalField::Name,
        rules: &[
            MatchRule::Exact(&[
                "name",
                "product",
                "product name",
                "product title",
                "title",
                "product_name",
            ]),
            MatchRule::Contains(&["name", "product", "title"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Brand,
        rules: &[
            MatchRule::Exact(&["brand", "brand name"]),
            MatchRule::Contains(&["brand", "manufacturer", "company"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Price,
        rules: &[
            MatchRule::Exact(&["price", "price usd", "cost", "amount"]),
            MatchRule::Contains(&["price", "cost", "amount"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Rating,
        rules: &[
            MatchRule::Exact(&["rating", "stars", "average rating"]),
            MatchRule::Contains(&["rating", "stars"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Reviews,
        rules: &[
            MatchRule::Exact(&["reviews", "review count", "ratings count", "num reviews"]),
            MatchRule::Contains(&["review", "ratings", "count"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Category,
        rules: &[
            MatchRule::Exact(&["category", "type", "product_type"]),
            MatchRule::Contains(&["category", "type"]),
        ],
    },
    FieldRules {
        field: CanonicalField::SkinType,
        rules: &[
            MatchRule::Exact(&["skin type", "skintype", "skin types", "skin_type"]),
            MatchRule::Contains(&["skin type", "skintype"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Concerns,
        rules: &[
            MatchRule::Exact(&["concerns", "concern", "skin concerns", "skin_concerns"]),
            MatchRule::Contains(&["concern"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Image,
        rules: &[
            MatchRule::Exact(&["image", "image url", "image_url", "img", "photo", "picture"]),
            MatchRule::Contains(&["image", "photo", "picture"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Description,
        rules: &[
            MatchRule::Exact(&["description", "desc", "details"]),
            MatchRule::Contains(&["description", "details", "desc"]),
        ],
    },
    FieldRules {
        field: CanonicalField::Ingredients,
        rules: &[
            MatchRule::Exact(&["ingredients", "inci", "ingredient list", "clean ingreds"]),
            MatchRule::Contains(&["ingredient", "inci", "clean ingreds"]),
        ],
    },
];

/// Rules for a single field.
pub fn rules_for(field: CanonicalField) -> &'static FieldRules {
    &FIELD_RULES[field.index()]
}
