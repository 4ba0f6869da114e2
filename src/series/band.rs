//! The vertical band that maps intensity to amplitude.

/// The `(min, base, max)` pixel triple controlling vertical amplitude.
///
/// `min_pixels` and `max_pixels` bound a record's rendered height, and
/// `base_pixels` is the reference height they are normalized against
/// (typically the strip's natural height, e.g. 40px). Dividing by the base
/// turns the triple into a clamp window in viewBox percent, so the same
/// band works for any on-screen size of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HeightBand {
    /// Minimum rendered height in pixels.
    pub min_pixels: f64,
    /// Reference height in pixels; must be nonzero for the band to be usable.
    pub base_pixels: f64,
    /// Maximum rendered height in pixels.
    pub max_pixels: f64,
}

impl HeightBand {
    /// Creates a band from its pixel triple.
    pub fn new(min_pixels: f64, base_pixels: f64, max_pixels: f64) -> Self {
        Self {
            min_pixels,
            base_pixels,
            max_pixels,
        }
    }

    /// The clamp window in viewBox percent: `((min/base)*100, (max/base)*100)`.
    ///
    /// Returns `None` when `base_pixels` is zero, since the window cannot be
    /// normalized; the series builder renders the flat baseline in that case
    /// instead of propagating infinities into coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatline::HeightBand;
    ///
    /// let band = HeightBand::new(10.0, 40.0, 100.0);
    /// assert_eq!(band.bounds(), Some((25.0, 250.0)));
    ///
    /// assert_eq!(HeightBand::new(10.0, 0.0, 100.0).bounds(), None);
    /// ```
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.base_pixels == 0.0 {
            return None;
        }
        let lower = self.min_pixels / self.base_pixels * 100.0;
        let upper = self.max_pixels / self.base_pixels * 100.0;
        Some((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_normalize_against_base() {
        let band = HeightBand::new(10.0, 40.0, 100.0);
        assert_eq!(band.bounds(), Some((25.0, 250.0)));
    }

    #[test]
    fn test_base_equal_to_max_caps_at_full_height() {
        let band = HeightBand::new(4.0, 40.0, 40.0);
        assert_eq!(band.bounds(), Some((10.0, 100.0)));
    }

    #[test]
    fn test_zero_base_is_unusable() {
        assert_eq!(HeightBand::new(0.0, 0.0, 0.0).bounds(), None);
        assert_eq!(HeightBand::new(10.0, 0.0, 100.0).bounds(), None);
    }

    #[test]
    fn test_zero_min_gives_zero_lower_bound() {
        let band = HeightBand::new(0.0, 40.0, 40.0);
        assert_eq!(band.bounds(), Some((0.0, 100.0)));
    }
}
