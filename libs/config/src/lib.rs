//! # Converter Configuration
//!
//! Default values and the settings struct for the KanjiVG conversion tools.
//!
//! ## Usage
//!
//! ```rust
//! use kvg_config::ConverterConfig;
//! use std::path::Path;
//!
//! let config = ConverterConfig::default();
//! let output = config.output_path(Path::new("data/kanji.json")).unwrap();
//! assert_eq!(output, Path::new("data/new_kanji.json"));
//! ```

pub mod converter_config;
pub mod defaults;

pub use converter_config::ConverterConfig;
