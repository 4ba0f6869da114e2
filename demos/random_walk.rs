use heatline::{HeightBand, IntensityRecord, clamp, heatmap_path};
use rand::Rng;

/// Renders a random walk of intensities in both path styles, for eyeballing
/// how the smoothing behaves on jagged data.
fn main() -> Result<(), anyhow::Error> {
    let mut rng = rand::thread_rng();

    let mut level = 0.5;
    let mut records = Vec::with_capacity(24);
    for _ in 0..24 {
        level = clamp(level + rng.gen_range(-0.2..0.2), 0.05, 1.0);
        records.push(IntensityRecord::new(level));
    }

    let band = HeightBand::new(4.0, 40.0, 40.0);
    println!("polyline: {}", heatmap_path(&records, band, false, false));
    println!();
    println!("smooth:   {}", heatmap_path(&records, band, true, true));
    Ok(())
}
