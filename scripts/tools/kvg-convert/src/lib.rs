//! # KanjiVG Conversion Tools
//!
//! File-level shell around `kvg-codec`: load a JSON dictionary, run one
//! reshaping pass, write the result next to the input as `new_<name>`.
//!
//! Two binaries share this library:
//! - `add-kvg-id <input.json>`: glyph-keyed → glyph-keyed with `kvg_id`
//! - `rekey-by-kvg-id <input.json>`: glyph-keyed with `kvg_id` → `kvg_id`-keyed
//!   with `symbol` and `unicode`

use clap::error::ErrorKind;
use clap::Parser;
use kvg_codec::{
    add_kvg_ids, load_document, rekey_by_kvg_id, write_document, Document, DocumentError,
};
use kvg_config::ConverterConfig;
use kvg_types::ConversionError;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Which reshaping pass a tool runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Add `kvg_id` to every glyph-keyed record
    AddKvgId,
    /// Re-key records by `kvg_id`, embedding `symbol` and `unicode`
    RekeyByKvgId,
}

impl ConversionMode {
    pub fn apply(self, input: &Document) -> Result<Document, ConversionError> {
        match self {
            ConversionMode::AddKvgId => add_kvg_ids(input),
            ConversionMode::RekeyByKvgId => rekey_by_kvg_id(input),
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMode::AddKvgId => write!(f, "add-kvg-id"),
            ConversionMode::RekeyByKvgId => write!(f, "rekey-by-kvg-id"),
        }
    }
}

/// Convert one file and return the path written
///
/// Nothing is written unless the settings are valid and loading and the whole
/// reshaping pass succeed. The input file is never overwritten.
pub fn convert_file(
    input: &Path,
    mode: ConversionMode,
    config: &ConverterConfig,
) -> Result<PathBuf, DocumentError> {
    config
        .validate()
        .map_err(|e| DocumentError::Configuration {
            message: format!("{e:#}"),
        })?;

    let output = config
        .output_path(input)
        .ok_or_else(|| DocumentError::InvalidPath {
            path: input.to_path_buf(),
        })?;
    if output == input {
        return Err(DocumentError::OutputCollision { path: output });
    }

    let document = load_document(input)?;
    info!(%mode, input = %input.display(), entries = document.len(), "converting");

    let converted = mode.apply(&document)?;
    write_document(&output, &converted, config.indent_width)?;

    info!(%mode, output = %output.display(), entries = converted.len(), "conversion complete");
    Ok(output)
}

#[derive(Parser, Debug)]
#[command(version, about = "Convert a KanjiVG dictionary JSON file")]
pub struct Cli {
    /// Input JSON file
    pub input: PathBuf,
}

/// Parse the single positional argument
///
/// Any other argument count prints the usage line to stdout and exits with
/// status 1. `--help` and `--version` behave as usual.
pub fn parse_cli_or_exit(bin_name: &str) -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(_) => {
            println!("Usage: {bin_name} <input.json>");
            std::process::exit(1);
        }
    }
}

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Shared `main` body for both binaries
pub fn run(bin_name: &str, mode: ConversionMode) -> anyhow::Result<()> {
    let cli = parse_cli_or_exit(bin_name);
    init_tracing();

    let output = convert_file(&cli.input, mode, &ConverterConfig::default())?;
    println!("Converted file written to: {}", output.display());
    Ok(())
}
