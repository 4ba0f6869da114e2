use std::io::Read;

use anyhow::{Context, Result};
use heatline::{HeightBand, IntensityRecord, heatmap_path};

/// Reads a JSON array of records from stdin and prints the path data.
///
/// Try it with:
///
/// ```text
/// echo '[{"intensityScoreNormalized":0.2},{},{"intensityScoreNormalized":0.9}]' \
///     | cargo run --example from_json --features serde
/// ```
fn main() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let records: Vec<IntensityRecord> =
        serde_json::from_str(&input).context("expected a JSON array of records")?;

    let band = HeightBand::new(10.0, 40.0, 100.0);
    println!("{}", heatmap_path(&records, band, true, true));
    Ok(())
}
