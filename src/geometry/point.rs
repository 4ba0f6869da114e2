//! 2D points in the output coordinate space.

/// A point in the heatmap's output coordinate space.
///
/// The series builder produces points with `x` in `[0, 1000]` and `y` in
/// `[0, 100]`, matching the SVG viewBox the consumer renders into (`y`
/// grows downward, so `y = 100` is the baseline). Points are plain values;
/// nothing mutates them after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal position, `0.0` at the left edge of the viewBox.
    pub x: f64,
    /// Vertical position, `0.0` at the top edge, `100.0` at the baseline.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let point = Point::new(500.0, 50.0);
        assert_eq!(point.x, 500.0);
        assert_eq!(point.y, 50.0);
    }

    #[test]
    fn test_copy_semantics() {
        let a = Point::new(1.0, 2.0);
        let b = a;
        assert_eq!(a, b);
    }
}
