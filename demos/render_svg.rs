use std::fs;

use heatline::{DOMAIN_HEIGHT, DOMAIN_WIDTH, HeightBand, IntensityRecord, heatmap_path};

fn main() -> Result<(), anyhow::Error> {
    // A day of activity in 12 buckets, already normalized upstream.
    let scores = [
        0.05, 0.12, 0.30, 0.55, 0.80, 1.0, 0.92, 0.70, 0.45, 0.28, 0.15, 0.08,
    ];
    let records: Vec<IntensityRecord> = scores.iter().map(|&s| IntensityRecord::new(s)).collect();

    // A 40px strip with a 4px floor so quiet buckets stay visible.
    let band = HeightBand::new(4.0, 40.0, 40.0);
    let d = heatmap_path(&records, band, true, true);

    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" \
         preserveAspectRatio=\"none\">\n  \
         <path d=\"{}\" fill=\"#f4a259\" stroke=\"none\" />\n</svg>\n",
        DOMAIN_WIDTH, DOMAIN_HEIGHT, d
    );

    fs::write("heatmap.svg", &svg)?;
    println!("wrote heatmap.svg ({} bytes)", svg.len());
    println!("{d}");
    Ok(())
}
