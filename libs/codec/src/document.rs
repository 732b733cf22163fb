//! In-memory document model
//!
//! A document is a JSON object whose values are records; records are JSON
//! objects the transformers treat as opaque apart from the reserved fields
//! below. `serde_json` is built with `preserve_order`, so iteration follows
//! the order keys appeared in the input file.

use kvg_types::ConversionError;
use serde_json::{Map, Value};

/// Top-level mapping of key to record
pub type Document = Map<String, Value>;

/// One glyph's metadata object
pub type Record = Map<String, Value>;

/// Identifier field added by annotation and consumed by re-keying
pub const KVG_ID_FIELD: &str = "kvg_id";

/// Original glyph, embedded when re-keying by identifier
pub const SYMBOL_FIELD: &str = "symbol";

/// Official `U+XXXX` notation, embedded when re-keying by identifier
pub const UNICODE_FIELD: &str = "unicode";

/// Short name of a JSON value's type for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn require_key(key: &str) -> Result<(), ConversionError> {
    if key.is_empty() {
        return Err(ConversionError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn require_record<'a>(key: &str, value: &'a Value) -> Result<&'a Record, ConversionError> {
    value.as_object().ok_or_else(|| {
        ConversionError::invalid_entry(
            key,
            format!("must be an object, found {}", value_kind(value)),
        )
    })
}
