//! Re-key a dictionary by `kvg_id`, embedding `symbol` and `unicode`

use kvg_convert::{run, ConversionMode};

fn main() -> anyhow::Result<()> {
    run("rekey-by-kvg-id", ConversionMode::RekeyByKvgId)
}
