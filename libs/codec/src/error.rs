//! Errors raised while loading, reshaping or persisting glyph documents
//!
//! Pure reshaping failures come from [`kvg_types::ConversionError`] and are
//! wrapped transparently; everything else here involves a path on disk.

use kvg_types::ConversionError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input path does not exist
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Content is not well-formed JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Well-formed JSON whose top-level value is not an object
    #[error("Top-level JSON in {} must be an object, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    /// No output file name can be derived from the input path
    #[error("Cannot derive an output path from {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// Converter settings rejected before any file is touched
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// Derived output path would overwrite the input
    #[error("Output path {} is the input file", .path.display())]
    OutputCollision { path: PathBuf },

    /// KanjiVG asset missing from the asset directory
    #[error("SVG not found: {file_name}")]
    AssetNotFound { file_name: String },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl DocumentError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocumentError>;
