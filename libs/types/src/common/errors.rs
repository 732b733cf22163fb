//! Error types for identifier derivation and document reshaping
//!
//! Every variant carries the offending value so a failed conversion can be
//! traced back to the entry that caused it.

use thiserror::Error;

/// Reason an identifier string was rejected by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierFault {
    /// Empty or whitespace-only after trimming
    Blank,
    /// Contains characters outside `[0-9a-fA-F]`
    NotHex,
    /// JSON value other than a string
    NotString,
}

impl std::fmt::Display for IdentifierFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierFault::Blank => write!(f, "identifier is blank"),
            IdentifierFault::NotHex => write!(f, "identifier is not valid hexadecimal"),
            IdentifierFault::NotString => write!(f, "identifier is not a string"),
        }
    }
}

/// Errors raised while deriving identifiers or reshaping glyph documents
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    /// Symbol handed to the deriver is empty or not a single code point
    #[error("Invalid symbol {symbol:?}: {reason}")]
    InvalidInput { symbol: String, reason: String },

    /// Document key is empty
    #[error("Invalid key: {key:?}")]
    InvalidKey { key: String },

    /// Identifier string could not be decoded
    #[error("Invalid kvg_id {value:?}: {fault}")]
    InvalidIdentifier { value: String, fault: IdentifierFault },

    /// Document value does not have the expected shape
    #[error("Entry for {key:?} is invalid: {reason}")]
    InvalidEntry { key: String, reason: String },

    /// Record lacks a required field or carries an empty one
    #[error("Missing {field} for symbol {key:?}")]
    MissingField { key: String, field: &'static str },

    /// Two entries resolve to the same output identifier
    #[error("Duplicate kvg_id detected: {kvg_id}")]
    DuplicateIdentifier { kvg_id: String },
}

impl ConversionError {
    pub fn invalid_identifier(value: impl Into<String>, fault: IdentifierFault) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            fault,
        }
    }

    pub fn invalid_entry(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
