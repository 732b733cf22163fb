//! KanjiVG stroke-order SVG lookup
//!
//! KanjiVG ships one file per glyph, named after the identifier:
//! `assets/kanjivg/04e01.svg`.

use crate::error::{DocumentError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub fn svg_file_name(kvg_id: &str) -> String {
    format!("{kvg_id}.svg")
}

pub fn svg_path(asset_dir: &Path, kvg_id: &str) -> PathBuf {
    asset_dir.join(svg_file_name(kvg_id))
}

/// Read the raw SVG markup for an identifier
pub fn load_svg(asset_dir: &Path, kvg_id: &str) -> Result<String> {
    let path = svg_path(asset_dir, kvg_id);
    fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DocumentError::AssetNotFound {
            file_name: svg_file_name(kvg_id),
        },
        _ => DocumentError::io(&path, e),
    })
}
