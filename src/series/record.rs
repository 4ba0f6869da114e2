//! Input records carrying normalized intensity scores.

/// One slot of heatmap input: a normalized density/heat score.
///
/// The score is expected in `[0, 1]`; out-of-range values are tolerated here
/// and clamped later against the band's window. A missing score (`None`, or
/// an absent/`null` field when deserialized) and a `NaN` score both resolve
/// to `0.0`, so such records render at the band's lower bound.
///
/// # Examples
///
/// ```
/// use heatline::IntensityRecord;
///
/// assert_eq!(IntensityRecord::new(0.72).normalized(), 0.72);
/// assert_eq!(IntensityRecord::default().normalized(), 0.0);
/// assert_eq!(IntensityRecord::new(f64::NAN).normalized(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IntensityRecord {
    /// Normalized intensity in `[0, 1]`, if present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intensity_score_normalized: Option<f64>,
}

impl IntensityRecord {
    /// A record with the given score.
    pub fn new(score: f64) -> Self {
        Self {
            intensity_score_normalized: Some(score),
        }
    }

    /// The effective score: the stored value, with `None` and `NaN`
    /// resolving to `0.0`.
    pub fn normalized(&self) -> f64 {
        match self.intensity_score_normalized {
            Some(score) if !score.is_nan() => score,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_score_passes_through() {
        assert_eq!(IntensityRecord::new(0.5).normalized(), 0.5);
        assert_eq!(IntensityRecord::new(0.0).normalized(), 0.0);
        assert_eq!(IntensityRecord::new(1.0).normalized(), 1.0);
    }

    #[test]
    fn test_missing_score_is_zero() {
        let record = IntensityRecord {
            intensity_score_normalized: None,
        };
        assert_eq!(record.normalized(), 0.0);
    }

    #[test]
    fn test_default_is_missing() {
        assert_eq!(IntensityRecord::default().normalized(), 0.0);
    }

    #[test]
    fn test_nan_score_is_zero() {
        assert_eq!(IntensityRecord::new(f64::NAN).normalized(), 0.0);
    }

    #[test]
    fn test_out_of_range_scores_survive() {
        // Range enforcement belongs to the band clamp, not the record.
        assert_eq!(IntensityRecord::new(1.5).normalized(), 1.5);
        assert_eq!(IntensityRecord::new(-0.25).normalized(), -0.25);
    }
}
