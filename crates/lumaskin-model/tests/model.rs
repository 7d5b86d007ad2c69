use lumaskin_model::{CanonicalField, ColumnMap, ColumnResolution, MatchPass, ProductRecord};

#[test]
fn product_record_round_trips_through_json() {
    let mut record = ProductRecord::new("Gentle Cleanser", "Acme").unwrap();
    record.price = 12.5;
    record.skin_type = vec!["Dry".to_string(), "Oily".to_string()];
    record.description = Some(String::new());

    let json = serde_json::to_string(&record).expect("serialize record");
    let back: ProductRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(back, record);
    // An empty description is still present, distinct from absent.
    assert_eq!(back.description.as_deref(), Some(""));
}

#[test]
fn column_map_serializes_field_keys_in_snake_case() {
    let mut map = ColumnMap::new();
    map.insert(
        CanonicalField::SkinType,
        ColumnResolution {
            column: 4,
            header: "Skin Type".to_string(),
            pass: MatchPass::Exact,
        },
    );
    let json = serde_json::to_value(&map).expect("serialize map");
    assert_eq!(json["entries"]["skin_type"]["column"], 4);
    assert_eq!(json["entries"]["skin_type"]["pass"], "exact");
}
