//! Add a `kvg_id` field to every record of a glyph-keyed dictionary

use kvg_convert::{run, ConversionMode};

fn main() -> anyhow::Result<()> {
    run("add-kvg-id", ConversionMode::AddKvgId)
}
