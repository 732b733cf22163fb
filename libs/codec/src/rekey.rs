//! Identifier-keyed conversion: move each record under its `kvg_id`
//!
//! ```text
//! { "丁": { ..., "kvg_id": "04e01" } }
//!     → { "04e01": { ..., "symbol": "丁", "unicode": "U+4E01" } }
//! ```

use crate::document::{
    require_key, require_record, Document, KVG_ID_FIELD, SYMBOL_FIELD, UNICODE_FIELD,
};
use kvg_types::{kvg_id_to_unicode, ConversionError, IdentifierFault};
use serde_json::Value;
use tracing::{debug, info};

/// Re-key a glyph-keyed document by each record's own `kvg_id`
///
/// Checks run per entry in input order: non-empty key, object value,
/// non-empty string `kvg_id`, decodable identifier, unseen output key. The
/// identifier is used verbatim as the output key, never re-derived from the
/// symbol. Any failure aborts the whole conversion.
pub fn rekey_by_kvg_id(input: &Document) -> Result<Document, ConversionError> {
    let mut output = Document::new();

    for (symbol, entry) in input {
        require_key(symbol)?;
        let record = require_record(symbol, entry)?;
        let kvg_id = required_kvg_id(symbol, record.get(KVG_ID_FIELD))?;

        let unicode = kvg_id_to_unicode(kvg_id)?;

        let mut rewritten = record.clone();
        rewritten.shift_remove(KVG_ID_FIELD);
        rewritten.insert(SYMBOL_FIELD.to_string(), Value::String(symbol.clone()));
        rewritten.insert(
            UNICODE_FIELD.to_string(),
            Value::String(unicode.into_inner()),
        );

        if output.contains_key(kvg_id) {
            return Err(ConversionError::DuplicateIdentifier {
                kvg_id: kvg_id.to_string(),
            });
        }

        debug!(%symbol, %kvg_id, "re-keyed entry");
        output.insert(kvg_id.to_string(), Value::Object(rewritten));
    }

    info!(entries = output.len(), "re-keyed document by kvg_id");
    Ok(output)
}

/// Empty values (`null`, `false`, `0`, `""`, `[]`, `{}`) count as missing;
/// any other non-string is an invalid identifier.
fn required_kvg_id<'a>(symbol: &str, value: Option<&'a Value>) -> Result<&'a str, ConversionError> {
    match value {
        None => Err(missing_kvg_id(symbol)),
        Some(value) if is_empty_value(value) => Err(missing_kvg_id(symbol)),
        Some(Value::String(kvg_id)) => Ok(kvg_id.as_str()),
        Some(other) => Err(ConversionError::invalid_identifier(
            other.to_string(),
            IdentifierFault::NotString,
        )),
    }
}

fn missing_kvg_id(symbol: &str) -> ConversionError {
    ConversionError::MissingField {
        key: symbol.to_string(),
        field: KVG_ID_FIELD,
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
