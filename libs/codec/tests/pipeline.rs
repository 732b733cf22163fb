//! Annotate-then-rekey pipeline tests
//!
//! Runs both reshaping passes back to back the way the dictionary data is
//! prepared: glyph-keyed source → glyph-keyed with kvg_id → kvg_id-keyed.

use kvg_codec::{
    add_kvg_ids, load_document, rekey_by_kvg_id, write_document, Document, KanjiCatalog,
    DEFAULT_INDENT, KVG_ID_FIELD, SYMBOL_FIELD, UNICODE_FIELD,
};
use kvg_types::{symbol_to_kvg_id, ConversionError, JlptLevel};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

fn source_document() -> Document {
    match json!({
        "丁": { "strokes": 2, "jlpt_new": 1, "meanings": ["Street"], "readings_on": ["ちょう", "てい"] },
        "書": { "strokes": 10, "jlpt_new": 5, "meanings": ["Write"], "readings_kun": ["か.く"] },
        "あ": { "romaji": "a" },
        "𦥑": { "strokes": 11, "jlpt_new": null }
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn test_round_trip_is_a_bijection() {
    let source = source_document();

    let annotated = add_kvg_ids(&source).unwrap();
    let rekeyed = rekey_by_kvg_id(&annotated).unwrap();

    assert_eq!(rekeyed.len(), source.len());
    for (symbol, record) in &source {
        let kvg_id = symbol_to_kvg_id(symbol).unwrap();
        let converted = rekeyed[kvg_id.as_str()].as_object().unwrap();

        assert_eq!(converted[SYMBOL_FIELD], json!(symbol));
        assert!(!converted.contains_key(KVG_ID_FIELD));
        for (field, value) in record.as_object().unwrap() {
            assert_eq!(&converted[field.as_str()], value);
        }
    }
}

#[test]
fn test_rekeyed_record_field_order() {
    let annotated = add_kvg_ids(&source_document()).unwrap();
    let rekeyed = rekey_by_kvg_id(&annotated).unwrap();

    let fields: Vec<&str> = rekeyed["04e01"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        fields,
        vec!["strokes", "jlpt_new", "meanings", "readings_on", SYMBOL_FIELD, UNICODE_FIELD]
    );
}

#[test]
fn test_output_keys_follow_input_order() {
    let annotated = add_kvg_ids(&source_document()).unwrap();
    let rekeyed = rekey_by_kvg_id(&annotated).unwrap();

    let keys: Vec<&str> = rekeyed.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["04e01", "066f8", "03042", "26951"]);
    assert_eq!(rekeyed["26951"][UNICODE_FIELD], json!("U+26951"));
}

#[test]
fn test_hand_edited_duplicate_stops_conversion() {
    let mut annotated = add_kvg_ids(&source_document()).unwrap();
    annotated["書"][KVG_ID_FIELD] = json!("04e01");

    let err = rekey_by_kvg_id(&annotated).unwrap_err();
    assert_eq!(
        err,
        ConversionError::DuplicateIdentifier {
            kvg_id: "04e01".to_string()
        }
    );
}

#[test]
fn test_persisted_pipeline_feeds_catalog() {
    let dir = TempDir::new().unwrap();
    let annotated_path = dir.path().join("new_kanji.json");
    let rekeyed_path = dir.path().join("new_new_kanji.json");

    let annotated = add_kvg_ids(&source_document()).unwrap();
    write_document(&annotated_path, &annotated, DEFAULT_INDENT).unwrap();

    let reloaded = load_document(&annotated_path).unwrap();
    assert_eq!(reloaded, annotated);

    let rekeyed = rekey_by_kvg_id(&reloaded).unwrap();
    write_document(&rekeyed_path, &rekeyed, DEFAULT_INDENT).unwrap();

    let catalog = KanjiCatalog::from_document(&load_document(&rekeyed_path).unwrap()).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get("066f8").unwrap().symbol, "書");

    let n5: Vec<String> = catalog
        .by_level(JlptLevel::N5)
        .into_iter()
        .map(|item| item.symbol)
        .collect();
    assert_eq!(n5, vec!["書".to_string()]);
}
