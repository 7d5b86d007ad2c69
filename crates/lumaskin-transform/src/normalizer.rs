//! Row-by-row assembly of product records.

use std::collections::BTreeMap;

use lumaskin_model::{CanonicalField, ColumnMap, ProductRecord, RawTable};
use serde::{Deserialize, Serialize};

use crate::coerce::{FieldValue, coercer_for, strip_enclosing_quotes};

/// Counters collected while normalizing a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeStats {
    pub rows_seen: usize,
    pub rows_kept: usize,
    /// Rows discarded for lacking a mandatory field.
    pub rows_dropped: usize,
    /// Cells that fell back to their default after failing to parse.
    pub degraded: BTreeMap<CanonicalField, usize>,
}

impl NormalizeStats {
    pub fn total_degraded(&self) -> usize {
        self.degraded.values().sum()
    }
}

/// Records produced from one table, with their stats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBatch {
    pub records: Vec<ProductRecord>,
    pub stats: NormalizeStats,
}

/// Reads a field's raw value from a row, with one layer of quotes removed.
fn read_raw<'a>(row: &'a [String], map: &ColumnMap, field: CanonicalField) -> &'a str {
    let raw = map
        .column(field)
        .and_then(|column| row.get(column))
        .map_or("", String::as_str);
    strip_enclosing_quotes(raw)
}

/// Normalizes a single row, or returns `None` when it has no name.
pub fn normalize_row(
    row: &[String],
    map: &ColumnMap,
    stats: &mut NormalizeStats,
) -> Option<ProductRecord> {
    let mut values: BTreeMap<CanonicalField, FieldValue> = BTreeMap::new();
    let mut degraded = Vec::new();

    for field in CanonicalField::ALL {
        let raw = read_raw(row, map, field);
        if field.is_mandatory() && raw.is_empty() {
            return None;
        }
        let coerced = coercer_for(field)(raw);
        if coerced.degraded {
            degraded.push(field);
        }
        values.insert(field, coerced.value);
    }

    for field in degraded {
        tracing::debug!(field = %field, "field degraded to default");
        *stats.degraded.entry(field).or_insert(0) += 1;
    }

    let mut take = |field: CanonicalField| {
        values
            .remove(&field)
            .unwrap_or_else(|| coercer_for(field)("").value)
    };
    Some(ProductRecord {
        name: take(CanonicalField::Name).into_text(),
        brand: take(CanonicalField::Brand).into_text(),
        price: take(CanonicalField::Price).into_decimal(),
        rating: take(CanonicalField::Rating).into_decimal(),
        reviews: take(CanonicalField::Reviews).into_count(),
        category: take(CanonicalField::Category).into_text(),
        skin_type: take(CanonicalField::SkinType).into_list(),
        concerns: take(CanonicalField::Concerns).into_list(),
        image: take(CanonicalField::Image).into_optional(),
        description: take(CanonicalField::Description).into_optional(),
        ingredients: take(CanonicalField::Ingredients).into_list(),
    })
}

/// Normalizes every data row of a table.
///
/// Rows without a name are dropped; no row ever aborts the batch.
pub fn normalize_records(table: &RawTable, map: &ColumnMap) -> NormalizedBatch {
    let mut stats = NormalizeStats::default();
    let mut records = Vec::with_capacity(table.rows.len());

    for (index, row) in table.rows.iter().enumerate() {
        stats.rows_seen += 1;
        match normalize_row(row, map, &mut stats) {
            Some(record) => records.push(record),
            None => {
                stats.rows_dropped += 1;
                // Row numbers count the header as line 1.
                tracing::debug!(row = index + 2, "dropped row without a product name");
            }
        }
    }
    stats.rows_kept = records.len();

    if stats.rows_dropped > 0 {
        tracing::warn!(
            dropped = stats.rows_dropped,
            kept = stats.rows_kept,
            "dropped rows without a product name"
        );
    }
    if stats.total_degraded() > 0 {
        tracing::info!(
            degraded = stats.total_degraded(),
            "some values fell back to defaults"
        );
    }

    NormalizedBatch { records, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumaskin_model::{ColumnResolution, MatchPass};

    fn map_of(fields: &[(CanonicalField, usize)]) -> ColumnMap {
        let mut map = ColumnMap::new();
        for (field, column) in fields {
            map.insert(
                *field,
                ColumnResolution {
                    column: *column,
                    header: field.to_string(),
                    pass: MatchPass::Exact,
                },
            );
        }
        map
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_normalize_row_full() {
        let map = map_of(&[
            (CanonicalField::Name, 0),
            (CanonicalField::Brand, 1),
            (CanonicalField::Price, 2),
            (CanonicalField::SkinType, 3),
            (CanonicalField::Ingredients, 4),
        ]);
        let mut stats = NormalizeStats::default();
        let record = normalize_row(
            &row(&["Serum", "Acme", "12,50", "Dry|Oily", "['Water', 'Glycerin']"]),
            &map,
            &mut stats,
        )
        .expect("record");

        assert_eq!(record.name, "Serum");
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.price, 12.5);
        assert_eq!(record.category, "Other");
        assert_eq!(record.skin_type, vec!["Dry", "Oily"]);
        assert_eq!(record.ingredients, vec!["Water", "Glycerin"]);
        assert_eq!(record.image, None);
        assert_eq!(stats.total_degraded(), 0);
    }

    #[test]
    fn test_normalize_row_without_name_is_dropped() {
        let map = map_of(&[(CanonicalField::Name, 0), (CanonicalField::Brand, 1)]);
        let mut stats = NormalizeStats::default();
        assert!(normalize_row(&row(&["", "Acme"]), &map, &mut stats).is_none());
        assert!(normalize_row(&row(&["\"\"", "Acme"]), &map, &mut stats).is_none());
    }

    #[test]
    fn test_whitespace_name_is_kept() {
        let map = map_of(&[(CanonicalField::Name, 0), (CanonicalField::Brand, 1)]);
        let mut stats = NormalizeStats::default();
        let record =
            normalize_row(&row(&["\"  \"", "Acme"]), &map, &mut stats).expect("record");
        assert_eq!(record.name, "  ");
        assert_eq!(record.brand, "Acme");
    }

    #[test]
    fn test_every_field_lands_in_its_own_slot() {
        let fields: Vec<_> = CanonicalField::ALL
            .into_iter()
            .enumerate()
            .map(|(column, field)| (field, column))
            .collect();
        let map = map_of(&fields);
        let mut cells = vec![String::new(); CanonicalField::ALL.len()];
        let mut set = |field: CanonicalField, value: &str| cells[field.index()] = value.to_string();
        set(CanonicalField::Name, "Gel");
        set(CanonicalField::Brand, "Acme");
        set(CanonicalField::Price, "9.99");
        set(CanonicalField::Rating, "4.2");
        set(CanonicalField::Reviews, "31");
        set(CanonicalField::Category, "Cleanser");
        set(CanonicalField::SkinType, "Oily");
        set(CanonicalField::Concerns, "Acne|Pores");
        set(CanonicalField::Image, "gel.png");
        set(CanonicalField::Description, "Foaming");
        set(CanonicalField::Ingredients, "Salicylic Acid");

        let mut stats = NormalizeStats::default();
        let record = normalize_row(&cells, &map, &mut stats).expect("record");
        assert_eq!(record.name, "Gel");
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.price, 9.99);
        assert_eq!(record.rating, 4.2);
        assert_eq!(record.reviews, 31);
        assert_eq!(record.category, "Cleanser");
        assert_eq!(record.skin_type, vec!["Oily"]);
        assert_eq!(record.concerns, vec!["Acne", "Pores"]);
        assert_eq!(record.image.as_deref(), Some("gel.png"));
        assert_eq!(record.description.as_deref(), Some("Foaming"));
        assert_eq!(record.ingredients, vec!["Salicylic Acid"]);
        assert_eq!(stats.total_degraded(), 0);
    }

    #[test]
    fn test_unresolved_name_drops_every_row() {
        let map = map_of(&[(CanonicalField::Brand, 0)]);
        let table = RawTable::new(vec!["brand".into()], vec![row(&["Acme"])]);
        let batch = normalize_records(&table, &map);
        assert!(batch.records.is_empty());
        assert_eq!(batch.stats.rows_dropped, 1);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let map = map_of(&[(CanonicalField::Name, 0), (CanonicalField::Price, 5)]);
        let mut stats = NormalizeStats::default();
        let record = normalize_row(&row(&["Toner"]), &map, &mut stats).expect("record");
        assert_eq!(record.price, 0.0);
        assert_eq!(stats.total_degraded(), 0);
    }

    #[test]
    fn test_degradations_are_counted_per_field() {
        let map = map_of(&[
            (CanonicalField::Name, 0),
            (CanonicalField::Price, 1),
            (CanonicalField::Reviews, 2),
        ]);
        let table = RawTable::new(
            vec!["name".into(), "price".into(), "reviews".into()],
            vec![
                row(&["A", "free", "many"]),
                row(&["B", "call us", "12"]),
                row(&["", "oops", "oops"]),
            ],
        );
        let batch = normalize_records(&table, &map);
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.stats.rows_seen, 3);
        assert_eq!(batch.stats.rows_kept, 2);
        assert_eq!(batch.stats.degraded.get(&CanonicalField::Price), Some(&2));
        assert_eq!(batch.stats.degraded.get(&CanonicalField::Reviews), Some(&1));
    }

    #[test]
    fn test_quoted_value_is_unquoted() {
        let map = map_of(&[(CanonicalField::Name, 0), (CanonicalField::Description, 1)]);
        let mut stats = NormalizeStats::default();
        let record =
            normalize_row(&row(&["\"Night Cream\"", "\"\""]), &map, &mut stats).expect("record");
        assert_eq!(record.name, "Night Cream");
        assert_eq!(record.description, None);
    }
}
