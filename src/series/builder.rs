//! Maps a record series onto the bounded point sequence.

use crate::geometry::{Point, clamp};

use super::{HeightBand, IntensityRecord};

/// Width of the output coordinate domain (the SVG viewBox x range).
pub const DOMAIN_WIDTH: f64 = 1000.0;

/// Height of the output coordinate domain (the SVG viewBox y range).
pub const DOMAIN_HEIGHT: f64 = 100.0;

/// Maps a record series onto an ordered point sequence spanning the domain.
///
/// The sequence always begins with the bottom-left anchor `(0, 100)` and
/// ends with the bottom-right anchor `(1000, 100)`, which closes the curve
/// into a fillable region. In between, each record contributes one point at
/// the center of its horizontal segment, with the vertical position derived
/// from its intensity and clamped to the band's window:
///
/// `y = 100 - clamp(intensity * 100, lower, upper)`
///
/// (inverted because y grows downward in the viewBox). Two flat edges pad
/// the series: a `(0, y)` duplicate before the first center unless `smooth`
/// is set, and a `(1000, y)` duplicate after the last center in both modes.
/// A single record gets both, so it still renders as a level plateau.
///
/// Degenerate inputs stay total: an empty series produces just the two
/// anchors, as does a band whose window cannot be normalized
/// ([`HeightBand::bounds`] returning `None`).
///
/// # Examples
///
/// ```
/// use heatline::{HeightBand, IntensityRecord, Point, build_points};
///
/// let records = [IntensityRecord::new(0.5)];
/// let band = HeightBand::new(10.0, 40.0, 100.0);
///
/// // 0.5 maps to raw 50, inside the (25, 250) window, so y = 100 - 50.
/// let points = build_points(&records, band, false);
/// assert_eq!(
///     points,
///     vec![
///         Point::new(0.0, 100.0),
///         Point::new(0.0, 50.0),
///         Point::new(500.0, 50.0),
///         Point::new(1000.0, 50.0),
///         Point::new(1000.0, 100.0),
///     ]
/// );
/// ```
pub fn build_points(records: &[IntensityRecord], band: HeightBand, smooth: bool) -> Vec<Point> {
    // Two anchors + one center per record + up to two edge duplicates.
    let mut points = Vec::with_capacity(records.len() + 4);
    points.push(Point::new(0.0, DOMAIN_HEIGHT));

    if let Some((lower, upper)) = band.bounds() {
        let segment_width = DOMAIN_WIDTH / records.len() as f64;
        for (i, record) in records.iter().enumerate() {
            let center_x = (i as f64 + 0.5) * segment_width;
            let y = DOMAIN_HEIGHT - clamp(record.normalized() * 100.0, lower, upper);

            // Flat left edge for polyline mode.
            if i == 0 && !smooth {
                points.push(Point::new(0.0, y));
            }
            points.push(Point::new(center_x, y));
            // Flat right edge, emitted in both modes.
            if i == records.len() - 1 {
                points.push(Point::new(DOMAIN_WIDTH, y));
            }
        }
    }

    points.push(Point::new(DOMAIN_WIDTH, DOMAIN_HEIGHT));
    points
}
