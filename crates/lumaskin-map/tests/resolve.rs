use lumaskin_map::{near_misses, resolve_columns};
use lumaskin_model::{CanonicalField, MatchPass};

fn headers(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|h| (*h).to_string()).collect()
}

#[test]
fn resolves_a_typical_marketplace_export() {
    let headers = headers(&[
        "product_name",
        "brand",
        "price",
        "product_type",
        "clean_ingreds",
        "Skin Types",
        "Skin_Concerns",
        "Image URL",
        "Average Rating",
        "Num Reviews",
        "Details",
    ]);
    let map = resolve_columns(&headers);

    let expected = [
        (CanonicalField::Name, 0),
        (CanonicalField::Brand, 1),
        (CanonicalField::Price, 2),
        (CanonicalField::Category, 3),
        (CanonicalField::Ingredients, 4),
        (CanonicalField::SkinType, 5),
        (CanonicalField::Concerns, 6),
        (CanonicalField::Image, 7),
        (CanonicalField::Rating, 8),
        (CanonicalField::Reviews, 9),
        (CanonicalField::Description, 10),
    ];
    for (field, column) in expected {
        assert_eq!(map.column(field), Some(column), "field {field}");
        assert_eq!(
            map.resolution(field).map(|r| r.pass),
            Some(MatchPass::Exact),
            "field {field}"
        );
    }
    assert!(near_misses(&headers, &map).is_empty());
}

#[test]
fn resolution_is_order_insensitive_across_fields() {
    let forward = resolve_columns(&headers(&["Title", "Maker Company", "Stars"]));
    let reversed = resolve_columns(&headers(&["Stars", "Maker Company", "Title"]));

    assert_eq!(forward.column(CanonicalField::Name), Some(0));
    assert_eq!(reversed.column(CanonicalField::Name), Some(2));
    assert_eq!(forward.column(CanonicalField::Brand), Some(1));
    assert_eq!(reversed.column(CanonicalField::Brand), Some(1));
    assert_eq!(forward.column(CanonicalField::Rating), Some(2));
    assert_eq!(reversed.column(CanonicalField::Rating), Some(0));
}

#[test]
fn column_map_serializes_for_diagnostics() {
    let map = resolve_columns(&headers(&["Name", "Brand"]));
    let json = serde_json::to_value(&map).expect("serialize map");
    assert_eq!(json["entries"]["name"]["header"], "Name");
    assert_eq!(json["entries"]["brand"]["pass"], "exact");
}
