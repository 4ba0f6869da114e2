//! Path commands and their string form.

use std::fmt;

use crate::geometry::Point;

/// One instruction in the output path string.
///
/// A serialized path is a `Move` followed by `Line`s (polyline mode) or
/// `Curve`s (smooth mode). The `Display` form is the exact SVG path-data
/// syntax the consumer embeds in a `<path d="...">` attribute, with every
/// coordinate formatted to one decimal place.
///
/// # Examples
///
/// ```
/// use heatline::{PathCommand, Point};
///
/// let m = PathCommand::Move(Point::new(0.0, 100.0));
/// assert_eq!(m.to_string(), "M 0.0,100.0");
///
/// let c = PathCommand::Curve {
///     c1: Point::new(100.0, 40.0),
///     c2: Point::new(300.0, 50.0),
///     to: Point::new(500.0, 50.0),
/// };
/// assert_eq!(c.to_string(), "C 100.0,40.0 300.0,50.0 500.0,50.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x,y`: begin the path at a point.
    Move(Point),
    /// `L x,y`: straight segment to a point.
    Line(Point),
    /// `C x1,y1 x2,y2 x,y`: cubic Bezier segment ending at `to`, with
    /// `c1` anchored at the segment's start and `c2` at its end.
    Curve {
        /// Start-side control point.
        c1: Point,
        /// End-side control point.
        c2: Point,
        /// Segment endpoint.
        to: Point,
    },
}

/// Rounds to one decimal place, half away from zero, folding `-0.0` to `0.0`.
///
/// Rounding before formatting pins down the two places `{:.1}` alone would
/// drift from the expected output: ties round outward (`0.25` becomes `0.3`,
/// not the banker's `0.2`), and values that round to zero from the negative
/// side print as `0.0` rather than `-0.0`.
fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::Move(p) => write!(f, "M {:.1},{:.1}", round1(p.x), round1(p.y)),
            PathCommand::Line(p) => write!(f, "L {:.1},{:.1}", round1(p.x), round1(p.y)),
            PathCommand::Curve { c1, c2, to } => write!(
                f,
                "C {:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
                round1(c1.x),
                round1(c1.y),
                round1(c2.x),
                round1(c2.y),
                round1(to.x),
                round1(to.y),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_format() {
        let command = PathCommand::Move(Point::new(0.0, 100.0));
        assert_eq!(command.to_string(), "M 0.0,100.0");
    }

    #[test]
    fn test_line_format() {
        let command = PathCommand::Line(Point::new(1000.0, 0.0));
        assert_eq!(command.to_string(), "L 1000.0,0.0");
    }

    #[test]
    fn test_curve_format() {
        let command = PathCommand::Curve {
            c1: Point::new(0.0, 90.0),
            c2: Point::new(-100.0, 60.0),
            to: Point::new(0.0, 50.0),
        };
        assert_eq!(command.to_string(), "C 0.0,90.0 -100.0,60.0 0.0,50.0");
    }

    #[test]
    fn test_one_decimal_rounding() {
        let command = PathCommand::Line(Point::new(166.66666666, 33.333333));
        assert_eq!(command.to_string(), "L 166.7,33.3");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(1.05), 1.1);
    }

    #[test]
    fn test_negative_zero_folds_to_zero() {
        assert_eq!(round1(-0.04).to_bits(), 0.0f64.to_bits());
        let command = PathCommand::Line(Point::new(-0.04, -0.0));
        assert_eq!(command.to_string(), "L 0.0,0.0");
    }

    #[test]
    fn test_whole_values_keep_trailing_decimal() {
        let command = PathCommand::Move(Point::new(500.0, 50.0));
        assert_eq!(command.to_string(), "M 500.0,50.0");
    }
}
