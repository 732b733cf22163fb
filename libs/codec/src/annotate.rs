//! Glyph-keyed annotation: add a `kvg_id` field to every record

use crate::document::{require_key, require_record, Document, KVG_ID_FIELD};
use kvg_types::{symbol_to_kvg_id, ConversionError};
use serde_json::Value;
use tracing::{debug, info};

/// Annotate every record with the identifier derived from its key
///
/// The output has exactly the input's keys, in the same order. Each record is
/// a fresh shallow copy of the input record plus `kvg_id`; an existing
/// `kvg_id` is overwritten. The input document is left untouched and the
/// first invalid entry aborts the whole pass.
pub fn add_kvg_ids(input: &Document) -> Result<Document, ConversionError> {
    let mut output = Document::new();

    for (symbol, entry) in input {
        require_key(symbol)?;
        let mut record = require_record(symbol, entry)?.clone();

        let kvg_id = symbol_to_kvg_id(symbol)?;
        debug!(%symbol, %kvg_id, "annotated entry");

        record.insert(KVG_ID_FIELD.to_string(), Value::String(kvg_id.into_inner()));
        output.insert(symbol.clone(), Value::Object(record));
    }

    info!(entries = output.len(), "added kvg_id to document");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn test_adds_kvg_id() {
        let input = doc(json!({ "丁": { "reading": "tei" } }));
        let output = add_kvg_ids(&input).unwrap();
        assert_eq!(
            Value::Object(output),
            json!({ "丁": { "reading": "tei", "kvg_id": "04e01" } })
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = doc(json!({
            "丁": { "reading": "tei", "strokes": 2 },
            "書": { "meanings": ["write"] }
        }));
        let before = input.clone();

        let output = add_kvg_ids(&input).unwrap();

        assert_eq!(input, before);
        assert!(input["丁"].get(KVG_ID_FIELD).is_none());
        assert_eq!(output["書"][KVG_ID_FIELD], json!("066f8"));
    }

    #[test]
    fn test_preserves_key_order_and_set() {
        let input = doc(json!({ "書": {}, "丁": {}, "あ": {} }));
        let output = add_kvg_ids(&input).unwrap();

        let keys: Vec<&str> = output.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["書", "丁", "あ"]);
    }

    #[test]
    fn test_existing_kvg_id_is_replaced() {
        let input = doc(json!({ "丁": { "kvg_id": "stale" } }));
        let output = add_kvg_ids(&input).unwrap();
        assert_eq!(output["丁"][KVG_ID_FIELD], json!("04e01"));
    }

    #[test]
    fn test_supplementary_plane_key() {
        let input = doc(json!({ "𦥑": {} }));
        let output = add_kvg_ids(&input).unwrap();
        assert_eq!(output["𦥑"][KVG_ID_FIELD], json!("26951"));
    }

    #[test]
    fn test_empty_document() {
        let output = add_kvg_ids(&Document::new()).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_empty_key_rejected() {
        let input = doc(json!({ "丁": {}, "": {} }));
        let err = add_kvg_ids(&input).unwrap_err();
        assert_eq!(err, ConversionError::InvalidKey { key: String::new() });
    }

    #[test]
    fn test_multi_character_key_rejected() {
        let input = doc(json!({ "丁目": {} }));
        let err = add_kvg_ids(&input).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { ref symbol, .. } if symbol == "丁目"));
    }

    #[test]
    fn test_non_object_value_rejected() {
        let input = doc(json!({ "丁": ["tei"] }));
        let err = add_kvg_ids(&input).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidEntry { ref key, .. } if key == "丁"));
        assert!(err.to_string().contains("found array"));
    }
}
