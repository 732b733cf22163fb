//! # KanjiVG Identifier Types
//!
//! Shared type system for the kanji dictionary tooling.
//!
//! ## Design Philosophy
//!
//! - **One code point, three spellings**: [`Symbol`], [`KvgId`] and
//!   [`UnicodeString`] are distinct types so a glyph is never confused with
//!   its file identifier or its display notation
//! - **Pure conversions**: derivation and decoding never touch I/O or state
//! - **Typed failures**: every rejected value surfaces as a
//!   [`ConversionError`] naming the offending input
//!
//! ## Quick Start
//!
//! ```rust
//! use kvg_types::{kvg_id_to_unicode, symbol_to_kvg_id};
//!
//! let id = symbol_to_kvg_id("書")?;
//! assert_eq!(id.as_str(), "066f8");
//! assert_eq!(kvg_id_to_unicode(id.as_str())?.as_str(), "U+66F8");
//! # Ok::<(), kvg_types::ConversionError>(())
//! ```

pub mod common;
pub mod kanji;

pub use common::errors::{ConversionError, IdentifierFault};
pub use common::identifiers::{
    kvg_id_to_unicode, symbol_to_kvg_id, KvgId, Symbol, UnicodeString, KVG_ID_MIN_WIDTH,
    UNICODE_PREFIX,
};
pub use kanji::{JlptLevel, KanjiEntry};

pub type Result<T> = std::result::Result<T, ConversionError>;
