//! Identifier types and error taxonomy shared by every crate

pub mod errors;
pub mod identifiers;
