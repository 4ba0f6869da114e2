//! Scalar clamping.

/// Bounds a value into `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, and `value`
/// otherwise. `min <= max` is the caller's obligation and is not validated;
/// with an inverted window the result is whichever bound wins the first
/// comparison. A `NaN` value fails both comparisons and passes through.
///
/// The result is idempotent: clamping a clamped value changes nothing.
///
/// # Examples
///
/// ```
/// use heatline::clamp;
///
/// assert_eq!(clamp(50.0, 25.0, 250.0), 50.0);
/// assert_eq!(clamp(-3.0, 0.0, 100.0), 0.0);
/// assert_eq!(clamp(120.0, 0.0, 100.0), 100.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
