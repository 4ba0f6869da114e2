//! Displacement vectors between points.

use super::Point;

/// A 2D displacement between two points.
///
/// Vectors are derived on demand, typically from a point's neighbors when
/// deriving a Bezier control point, and never stored. The accessors return
/// new values instead of mutating, so a vector is a plain immutable value
/// with two numeric fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Vector {
    /// The displacement from `from` to `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatline::{Point, Vector};
    ///
    /// let v = Vector::between(Point::new(0.0, 100.0), Point::new(500.0, 50.0));
    /// assert_eq!(v.dx, 500.0);
    /// assert_eq!(v.dy, -50.0);
    /// ```
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            dx: to.x - from.x,
            dy: to.y - from.y,
        }
    }

    /// The same displacement pointing the opposite way.
    pub fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// The displacement with both components scaled by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            dx: self.dx * factor,
            dy: self.dy * factor,
        }
    }
}
