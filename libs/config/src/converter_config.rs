//! Converter Configuration Module
//!
//! Settings for the conversion tools. The command-line tools always run with
//! [`ConverterConfig::default`]; [`ConverterConfig::load`] lets embedding
//! callers override the defaults from a TOML file.

use crate::defaults;
use anyhow::{bail, Context, Result};
use config_crate::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Prepended to the input file name to form the output file name
    pub output_prefix: String,

    /// Spaces per nesting level in the written JSON
    pub indent_width: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_prefix: defaults::OUTPUT_PREFIX.to_string(),
            indent_width: defaults::INDENT_WIDTH,
        }
    }
}

impl ConverterConfig {
    /// Load configuration from defaults, overridden by an optional TOML file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("output_prefix", defaults::OUTPUT_PREFIX)
            .context("Failed to set default output_prefix")?
            .set_default("indent_width", defaults::INDENT_WIDTH as u64)
            .context("Failed to set default indent_width")?;

        if let Some(path) = path {
            info!("Loading converter config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        debug!(?config, "converter config loaded");
        Ok(config)
    }

    /// Reject settings that would overwrite the input or produce unreadable output
    pub fn validate(&self) -> Result<()> {
        if self.output_prefix.is_empty() {
            bail!("output_prefix cannot be empty: output would overwrite the input file");
        }
        if self.output_prefix.contains(['/', '\\']) {
            bail!(
                "output_prefix {:?} must not contain path separators",
                self.output_prefix
            );
        }
        if self.indent_width == 0 {
            bail!("indent_width must be at least 1");
        }
        Ok(())
    }

    /// Sibling path of `input` carrying the output prefix
    ///
    /// Returns `None` when `input` has no file name (e.g. `/` or `..`).
    pub fn output_path(&self, input: &Path) -> Option<PathBuf> {
        let name = input.file_name()?;
        let mut prefixed = std::ffi::OsString::from(&self.output_prefix);
        prefixed.push(name);
        Some(input.with_file_name(prefixed))
    }
}
