//! # KanjiVG Dictionary Codec
//!
//! ## Purpose
//!
//! The "rules" layer between the pure identifier types in `kvg-types` and the
//! command-line tools:
//! - Record reshaping: [`add_kvg_ids`] and [`rekey_by_kvg_id`]
//! - JSON document loading and pretty, atomic persistence
//! - Typed catalog over converted dictionaries and SVG asset lookup
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types  →  [codec]  →  scripts/tools/kvg-convert
//!     ↑             ↓                 ↓
//! Symbol/KvgId  Reshaping       Argument handling
//! Derivation    JSON I/O        Output naming
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kvg_codec::{add_kvg_ids, rekey_by_kvg_id, Document};
//! use serde_json::json;
//!
//! let mut input = Document::new();
//! input.insert("丁".into(), json!({ "reading": "tei" }));
//!
//! let annotated = add_kvg_ids(&input)?;
//! let rekeyed = rekey_by_kvg_id(&annotated)?;
//! assert_eq!(rekeyed["04e01"]["unicode"], "U+4E01");
//! # Ok::<(), kvg_types::ConversionError>(())
//! ```

pub mod annotate;
pub mod assets;
pub mod catalog;
pub mod document;
pub mod error;
pub mod json_io;
pub mod rekey;

pub use annotate::add_kvg_ids;
pub use assets::{load_svg, svg_file_name, svg_path};
pub use catalog::{KanjiCatalog, KanjiDetail, KanjiSummary};
pub use document::{Document, Record, KVG_ID_FIELD, SYMBOL_FIELD, UNICODE_FIELD};
pub use error::{DocumentError, Result};
pub use json_io::{load_document, to_pretty_string, write_document, DEFAULT_INDENT};
pub use rekey::rekey_by_kvg_id;
