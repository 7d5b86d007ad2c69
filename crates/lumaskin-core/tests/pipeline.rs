//! End-to-end tests for the import pipeline.

use lumaskin_core::{
    EmptyInputReason, ImportError, MISSING_COLUMNS_HINT, ProductStore, StoreError, StoreStage,
    import_products, parse_products,
};
use lumaskin_ingest::{DecodeError, TextEncoding};
use lumaskin_model::{CanonicalField, ProductRecord};
use proptest::prelude::*;

// ============================================================================
// Test store
// ============================================================================

#[derive(Default)]
struct RecordingStore {
    products: Vec<ProductRecord>,
    calls: Vec<&'static str>,
    fail_delete: bool,
    fail_insert: bool,
}

impl ProductStore for RecordingStore {
    fn delete_all(&mut self) -> Result<(), StoreError> {
        self.calls.push("delete_all");
        if self.fail_delete {
            return Err(StoreError::Backend("delete rejected".to_string()));
        }
        self.products.clear();
        Ok(())
    }

    fn insert_many(&mut self, records: &[ProductRecord]) -> Result<usize, StoreError> {
        self.calls.push("insert_many");
        if self.fail_insert {
            return Err(StoreError::Backend("duplicate key".to_string()));
        }
        self.products.extend_from_slice(records);
        Ok(records.len())
    }
}

const CATALOG: &str = "\
Product Name,Brand,Price,Rating,Reviews,Category,Skin Type,Concerns,Image,Description,Ingredients
Hydra Serum,\"Glow, Inc.\",\"$1,234.56\",\"4,5\",\"1,024\",Serum,Dry|Normal,\"Dryness, Dullness\",https://cdn.example/serum.png,Light serum,\"['Water', 'Glycerin']\"
Clay Mask,,12,50,,,,Oily,,,,Kaolin, Zinc
,Nameless,9.99,,,,,,,,
";

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parses_a_mixed_quality_catalog() {
    let outcome = parse_products(CATALOG.as_bytes()).expect("parse catalog");
    assert_eq!(outcome.encoding, TextEncoding::Utf8);
    assert_eq!(outcome.stats.rows_seen, 3);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stats.rows_dropped, 1);

    let serum = &outcome.records[0];
    assert_eq!(serum.name, "Hydra Serum");
    assert_eq!(serum.brand, "Glow, Inc.");
    assert_eq!(serum.price, 1234.56);
    assert_eq!(serum.rating, 4.5);
    assert_eq!(serum.reviews, 1024);
    assert_eq!(serum.category, "Serum");
    assert_eq!(serum.skin_type, vec!["Dry", "Normal"]);
    assert_eq!(serum.concerns, vec!["Dryness", "Dullness"]);
    assert_eq!(serum.image.as_deref(), Some("https://cdn.example/serum.png"));
    assert_eq!(serum.description.as_deref(), Some("Light serum"));
    assert_eq!(serum.ingredients, vec!["Water", "Glycerin"]);

    // Unquoted "12,50" splits into two cells: price 12, rating 50.
    let mask = &outcome.records[1];
    assert_eq!(mask.brand, "Unknown");
    assert_eq!(mask.price, 12.0);
    assert_eq!(mask.rating, 50.0);
    assert_eq!(mask.category, "Other");
    assert!(mask.image.is_none());
}

#[test]
fn european_semicolon_file_resolves_by_keyword() {
    let text = "prod_title;Company;Cost (USD)\nNight Cream;Lune;12,50\nDay Cream;Lune;1,234\n";
    let outcome = parse_products(text.as_bytes()).expect("parse");

    assert_eq!(outcome.column_map.column(CanonicalField::Name), Some(0));
    assert_eq!(outcome.column_map.column(CanonicalField::Brand), Some(1));
    assert_eq!(outcome.column_map.column(CanonicalField::Price), Some(2));
    assert_eq!(outcome.records[0].price, 12.5);
    assert_eq!(outcome.records[1].price, 1234.0);
}

#[test]
fn unbracketed_ingredients_stay_one_item() {
    let text = "name,ingredients\nToner,\"Water, Glycerin\"\n";
    let outcome = parse_products(text.as_bytes()).expect("parse");
    assert_eq!(outcome.records[0].ingredients, vec!["Water, Glycerin"]);
}

#[test]
fn whitespace_only_names_are_kept() {
    let outcome = parse_products(b"name,brand\n\"\"\"  \"\"\",Acme\nReal,Acme\n").expect("parse");
    let names: Vec<_> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["  ", "Real"]);
    assert_eq!(outcome.stats.rows_dropped, 0);
}

#[test]
fn utf16_uploads_match_utf8() {
    let text = "name\tbrand\tprice\nCrème Riche\tMaison\t19,90\n";
    let mut le = vec![0xFF, 0xFE];
    let mut be = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        le.extend_from_slice(&unit.to_le_bytes());
        be.extend_from_slice(&unit.to_be_bytes());
    }

    let utf8 = parse_products(text.as_bytes()).expect("utf-8");
    let from_le = parse_products(&le).expect("utf-16le");
    let from_be = parse_products(&be).expect("utf-16be");

    assert_eq!(from_le.encoding, TextEncoding::Utf16Le);
    assert_eq!(from_be.encoding, TextEncoding::Utf16Be);
    assert_eq!(from_le.records, utf8.records);
    assert_eq!(from_be.records, utf8.records);
    assert_eq!(utf8.records[0].price, 19.9);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn malformed_bytes_are_a_decode_error() {
    let err = parse_products(&[b'n', b'a', 0xFF, b'\n']).unwrap_err();
    assert_eq!(err.kind(), "decode_error");
    assert!(matches!(
        err,
        ImportError::Decode(DecodeError {
            encoding: TextEncoding::Utf8
        })
    ));
}

#[test]
fn empty_inputs_are_reported_distinctly() {
    let cases: [(&[u8], EmptyInputReason); 3] = [
        (&b"\r\n\n"[..], EmptyInputReason::NoLines),
        (&b" , \nSerum,Acme\n"[..], EmptyInputReason::BlankHeader),
        (&b"name,brand\n"[..], EmptyInputReason::NoDataRows),
    ];
    for (bytes, expected) in cases {
        match parse_products(bytes) {
            Err(ImportError::EmptyInput { reason }) => assert_eq!(reason, expected),
            other => panic!("expected empty input, got {other:?}"),
        }
    }
}

#[test]
fn rows_without_names_yield_diagnostics() {
    let err = parse_products(b"sku,brand\n,Acme\n,Glow\n").unwrap_err();
    let diagnostics = err.diagnostics().expect("diagnostics");
    assert_eq!(err.kind(), "no_valid_records");
    assert_eq!(diagnostics.detected_headers, vec!["sku", "brand"]);
    assert_eq!(diagnostics.sample_row, vec!["", "Acme"]);
    assert_eq!(diagnostics.hint, MISSING_COLUMNS_HINT);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn import_replaces_store_contents() {
    let mut store = RecordingStore::default();
    import_products(b"name\nOld Product\n", &mut store).expect("first import");
    let summary = import_products(b"name\nNew A\nNew B\n", &mut store).expect("second import");

    assert_eq!(summary.inserted, 2);
    let names: Vec<_> = store.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["New A", "New B"]);
    assert_eq!(
        store.calls,
        vec!["delete_all", "insert_many", "delete_all", "insert_many"]
    );
}

#[test]
fn delete_failure_aborts_before_insert() {
    let mut store = RecordingStore {
        fail_delete: true,
        ..RecordingStore::default()
    };
    let err = import_products(b"name\nSerum\n", &mut store).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Store {
            stage: StoreStage::Delete,
            ..
        }
    ));
    assert_eq!(store.calls, vec!["delete_all"]);
}

#[test]
fn insert_failure_carries_store_detail() {
    let mut store = RecordingStore {
        fail_insert: true,
        ..RecordingStore::default()
    };
    let err = import_products(b"name\nSerum\n", &mut store).unwrap_err();
    assert_eq!(err.kind(), "store_error");
    assert!(err.to_string().contains("duplicate key"));
}

#[test]
fn parse_failures_never_touch_the_store() {
    let mut store = RecordingStore::default();
    assert!(import_products(b"", &mut store).is_err());
    assert!(store.calls.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn parsing_is_idempotent(
        rows in prop::collection::vec(("[A-Za-z ]{0,10}", "[0-9,.$ ]{0,8}", "[a-z|, ]{0,12}"), 1..12)
    ) {
        let mut text = String::from("Product Name;Price;Skin Type\n");
        for (name, price, skin) in &rows {
            text.push_str(&format!("{name};{price};{skin}\n"));
        }
        let first = parse_products(text.as_bytes());
        let second = parse_products(text.as_bytes());
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.report(), b.report()),
            _ => prop_assert!(false, "runs disagree"),
        }
    }
}
