//! JSON document loading and persistence
//!
//! Output is pretty-printed with a configurable indent (4 spaces by default),
//! non-ASCII characters are written literally, and the file only appears on
//! disk once it has been fully written.

use crate::document::{value_kind, Document};
use crate::error::{DocumentError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Indent width used by the conversion tools
pub const DEFAULT_INDENT: usize = 4;

/// Load a JSON file whose top-level value must be an object
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        });
    }

    // Invalid UTF-8 is a parse failure, not an I/O one
    let contents = fs::read(path).map_err(|e| DocumentError::io(path, e))?;
    let value: Value = serde_json::from_slice(&contents).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(document) => {
            debug!(path = %path.display(), entries = document.len(), "loaded document");
            Ok(document)
        }
        other => Err(DocumentError::NotAnObject {
            path: path.to_path_buf(),
            found: value_kind(&other),
        }),
    }
}

/// Render a document as indented JSON text
pub fn to_pretty_string(document: &Document, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(DocumentError::Serialize)?;

    // serde_json only ever emits valid UTF-8
    String::from_utf8(buffer).map_err(|e| {
        DocumentError::Serialize(serde::ser::Error::custom(e.to_string()))
    })
}

/// Write a document to `path`, replacing any existing file
///
/// The document is rendered in memory and written through a temporary file in
/// the destination directory, then renamed into place.
pub fn write_document(path: &Path, document: &Document, indent: usize) -> Result<()> {
    let rendered = to_pretty_string(document, indent)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| DocumentError::io(dir, e))?;
    staged
        .write_all(rendered.as_bytes())
        .map_err(|e| DocumentError::io(staged.path(), e))?;
    staged
        .persist(path)
        .map_err(|e| DocumentError::io(path, e.error))?;

    debug!(path = %path.display(), entries = document.len(), "wrote document");
    Ok(())
}
