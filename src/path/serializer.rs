//! Walks a point sequence and emits the path-command string.

use std::fmt::Write;

use crate::geometry::Point;
use crate::series::{HeightBand, IntensityRecord, build_points};

use super::command::PathCommand;
use super::control::control_point;

/// Serializes a point sequence into an SVG path-data string.
///
/// The first point becomes a `Move`; every later point becomes a `Line`
/// when `use_bezier` is false, or a smooth cubic `Curve` otherwise. Curve
/// control points come from [`control_point`]: the start-side one is
/// anchored at the previous point (forward tangent), the end-side one at
/// the current point (reversed tangent), so consecutive segments share
/// tangent directions and join smoothly.
///
/// Points are consumed strictly in input order with no deduplication. An
/// empty sequence produces an empty string with no `Move` command.
///
/// # Examples
///
/// ```
/// use heatline::{Point, serialize_path};
///
/// assert_eq!(serialize_path(&[], true), "");
///
/// let line = [Point::new(0.0, 100.0), Point::new(1000.0, 0.0)];
/// assert_eq!(serialize_path(&line, false), "M 0.0,100.0 L 1000.0,0.0");
/// ```
pub fn serialize_path(points: &[Point], use_bezier: bool) -> String {
    let mut path = String::new();
    for (i, &point) in points.iter().enumerate() {
        let command = if i == 0 {
            PathCommand::Move(point)
        } else if use_bezier {
            // The segment runs points[i-1] -> point; its start-side control
            // leans on the neighbor before the segment, its end-side control
            // on the neighbor after it. Either neighbor may not exist.
            let before_prev = i.checked_sub(2).and_then(|j| points.get(j)).copied();
            let c1 = control_point(points[i - 1], before_prev, Some(point), false);
            let c2 = control_point(point, Some(points[i - 1]), points.get(i + 1).copied(), true);
            PathCommand::Curve { c1, c2, to: point }
        } else {
            PathCommand::Line(point)
        };

        if i > 0 {
            path.push(' ');
        }
        let _ = write!(path, "{command}");
    }
    path
}

/// Builds the full path string for a record series in one call.
///
/// Composes [`build_points`] and [`serialize_path`] the way a renderer
/// consumes them: `smooth` controls whether the point sequence gets the
/// flat left edge, `use_bezier` whether segments come out as `C` curves or
/// `L` lines.
///
/// # Examples
///
/// ```
/// use heatline::{HeightBand, IntensityRecord, heatmap_path};
///
/// let records = [IntensityRecord::new(0.5)];
/// let band = HeightBand::new(10.0, 40.0, 100.0);
///
/// let d = heatmap_path(&records, band, false, false);
/// assert_eq!(d, "M 0.0,100.0 L 0.0,50.0 L 500.0,50.0 L 1000.0,50.0 L 1000.0,100.0");
///
/// // No records: the two anchors joined by one flat curve.
/// assert_eq!(
///     heatmap_path(&[], band, true, true),
///     "M 0.0,100.0 C 200.0,100.0 800.0,100.0 1000.0,100.0"
/// );
/// ```
pub fn heatmap_path(
    records: &[IntensityRecord],
    band: HeightBand,
    smooth: bool,
    use_bezier: bool,
) -> String {
    serialize_path(&build_points(records, band, smooth), use_bezier)
}
