//! # Glyph Identifiers
//!
//! Three views of the same code point:
//!
//! - [`Symbol`]: the glyph itself, exactly one Unicode scalar value
//! - [`KvgId`]: KanjiVG file identifier, lowercase hex padded to at least 5 digits
//! - [`UnicodeString`]: official `U+XXXX` notation, uppercase hex, no padding
//!
//! ```rust
//! use kvg_types::{kvg_id_to_unicode, symbol_to_kvg_id};
//!
//! let kvg_id = symbol_to_kvg_id("丁").unwrap();
//! assert_eq!(kvg_id.as_str(), "04e01");
//!
//! let unicode = kvg_id_to_unicode(kvg_id.as_str()).unwrap();
//! assert_eq!(unicode.as_str(), "U+4E01");
//! ```
//!
//! Code points beyond the BMP produce wider identifiers (`"𦥑"` → `"26951"`);
//! padding is a minimum width, never a truncation.

use crate::common::errors::{ConversionError, IdentifierFault};
use serde::Serialize;

/// Minimum width of a KanjiVG identifier in hex digits
pub const KVG_ID_MIN_WIDTH: usize = 5;

/// Prefix of the official code point notation
pub const UNICODE_PREFIX: &str = "U+";

/// A single glyph character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
pub struct Symbol(char);

impl Symbol {
    /// Parse a string holding exactly one code point
    pub fn parse(symbol: &str) -> Result<Self, ConversionError> {
        let mut chars = symbol.chars();
        let first = chars.next().ok_or_else(|| ConversionError::InvalidInput {
            symbol: symbol.to_string(),
            reason: "empty symbol".to_string(),
        })?;
        if chars.next().is_some() {
            return Err(ConversionError::InvalidInput {
                symbol: symbol.to_string(),
                reason: format!(
                    "expected a single character, got {}",
                    symbol.chars().count()
                ),
            });
        }
        Ok(Self(first))
    }

    #[inline(always)]
    pub const fn new(inner: char) -> Self {
        Self(inner)
    }

    #[inline(always)]
    pub const fn inner(&self) -> char {
        self.0
    }

    #[inline(always)]
    pub const fn code_point(&self) -> u32 {
        self.0 as u32
    }

    /// Derive the KanjiVG identifier for this glyph
    pub fn kvg_id(&self) -> KvgId {
        KvgId(format!("{:0width$x}", self.code_point(), width = KVG_ID_MIN_WIDTH))
    }
}

impl From<char> for Symbol {
    #[inline(always)]
    fn from(inner: char) -> Self {
        Self(inner)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// KanjiVG identifier: lowercase hex code point, zero-padded to 5 digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct KvgId(String);

impl KvgId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Code point this identifier encodes
    pub fn code_point(&self) -> u32 {
        // Only constructed from a char, so always valid hex within u32
        u32::from_str_radix(&self.0, 16).unwrap_or_default()
    }
}

impl std::fmt::Display for KvgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KvgId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<KvgId> for String {
    fn from(id: KvgId) -> String {
        id.0
    }
}

/// Official code point notation, e.g. `U+4E01`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UnicodeString(String);

impl UnicodeString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Hex digits after the `U+` prefix
    pub fn hex_digits(&self) -> &str {
        &self.0[UNICODE_PREFIX.len()..]
    }

    /// Character named by this notation, if it is a valid scalar value
    pub fn to_char(&self) -> Option<char> {
        u32::from_str_radix(self.hex_digits(), 16)
            .ok()
            .and_then(char::from_u32)
    }
}

impl std::fmt::Display for UnicodeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UnicodeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<UnicodeString> for String {
    fn from(unicode: UnicodeString) -> String {
        unicode.0
    }
}

/// Convert a single character into its KanjiVG identifier
pub fn symbol_to_kvg_id(symbol: &str) -> Result<KvgId, ConversionError> {
    Ok(Symbol::parse(symbol)?.kvg_id())
}

/// Convert a KanjiVG identifier into `U+XXXX` notation
///
/// Surrounding whitespace is ignored and input case does not matter. Leading
/// zeros are dropped, so `"04e01"` and `"4E01"` both give `"U+4E01"`.
pub fn kvg_id_to_unicode(kvg_id: &str) -> Result<UnicodeString, ConversionError> {
    let hex = kvg_id.trim();
    if hex.is_empty() {
        return Err(ConversionError::invalid_identifier(
            kvg_id,
            IdentifierFault::Blank,
        ));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConversionError::invalid_identifier(
            kvg_id,
            IdentifierFault::NotHex,
        ));
    }

    // Normalise on the digit string so arbitrarily wide values never overflow
    let significant = hex.trim_start_matches('0');
    let digits = if significant.is_empty() { "0" } else { significant };

    Ok(UnicodeString(format!(
        "{}{}",
        UNICODE_PREFIX,
        digits.to_ascii_uppercase()
    )))
}
