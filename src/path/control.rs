//! Bezier control-point derivation from neighboring points.

use crate::geometry::{Point, Vector};

/// Fraction of the neighbor-to-neighbor tangent that offsets a control
/// point from its anchor.
///
/// The output contract depends on this value, so it is a constant rather
/// than a parameter: control points sit 20% of the way along the local
/// tangent, which gives the curve its gentle Catmull-Rom-like roundness.
pub const SMOOTHING: f64 = 0.2;

/// Derives the Bezier control point for `current` from its neighbors.
///
/// The tangent direction at `current` is estimated as the displacement from
/// its previous neighbor to its next neighbor, which smooths the curve
/// through the point without storing any curvature state. The control point
/// sits [`SMOOTHING`] of the way along that tangent from `current`;
/// `reverse` flips the direction, which is how the end-side control point
/// of a segment is produced.
///
/// A missing neighbor falls back to `current` itself, collapsing the
/// tangent to zero length at sequence boundaries:
///
/// ```
/// use heatline::{Point, control_point};
///
/// let p = Point::new(4.0, 2.0);
/// assert_eq!(control_point(p, None, None, false), p);
/// ```
pub fn control_point(
    current: Point,
    prev: Option<Point>,
    next: Option<Point>,
    reverse: bool,
) -> Point {
    let tangent = Vector::between(prev.unwrap_or(current), next.unwrap_or(current));
    let tangent = if reverse { tangent.reversed() } else { tangent };
    let offset = tangent.scaled(SMOOTHING);
    Point::new(current.x + offset.dx, current.y + offset.dy)
}
