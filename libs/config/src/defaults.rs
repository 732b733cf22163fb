//! Default values shared by the conversion tools

/// Output files are written next to the input as `new_<name>`
pub const OUTPUT_PREFIX: &str = "new_";

/// Indentation of written JSON, in spaces
pub const INDENT_WIDTH: usize = 4;
