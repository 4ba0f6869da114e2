#![cfg(feature = "serde")]

//! Wire-format tests for the serde-enabled types.
//!
//! Upstream feeds arrive as JSON with camelCase keys; these tests pin the
//! field naming and the absent/null score handling.

use heatline::{HeightBand, IntensityRecord, Point, heatmap_path};

#[test]
fn test_record_deserializes_camel_case_key() {
    let record: IntensityRecord =
        serde_json::from_str(r#"{"intensityScoreNormalized":0.72}"#).unwrap();
    assert_eq!(record.intensity_score_normalized, Some(0.72));
}

#[test]
fn test_missing_score_deserializes_as_none() {
    let record: IntensityRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(record.intensity_score_normalized, None);
    assert_eq!(record.normalized(), 0.0);
}

#[test]
fn test_null_score_deserializes_as_none() {
    let record: IntensityRecord =
        serde_json::from_str(r#"{"intensityScoreNormalized":null}"#).unwrap();
    assert_eq!(record.intensity_score_normalized, None);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let payload = r#"{"intensityScoreNormalized":0.5,"bucketStart":1724544000}"#;
    let record: IntensityRecord = serde_json::from_str(payload).unwrap();
    assert_eq!(record.intensity_score_normalized, Some(0.5));
}

#[test]
fn test_record_serializes_camel_case_key() {
    let json = serde_json::to_string(&IntensityRecord::new(0.72)).unwrap();
    assert_eq!(json, r#"{"intensityScoreNormalized":0.72}"#);
}

#[test]
fn test_record_array_feeds_the_pipeline() {
    let payload = r#"[
        {"intensityScoreNormalized":0.2},
        {},
        {"intensityScoreNormalized":0.9}
    ]"#;
    let records: Vec<IntensityRecord> = serde_json::from_str(payload).unwrap();
    assert_eq!(records.len(), 3);

    let band = HeightBand::new(10.0, 40.0, 100.0);
    let path = heatmap_path(&records, band, true, true);
    assert!(path.starts_with("M 0.0,100.0 C"));
}

#[test]
fn test_band_round_trips_with_pixel_keys() {
    let json = r#"{"minPixels":10.0,"basePixels":40.0,"maxPixels":100.0}"#;
    let band: HeightBand = serde_json::from_str(json).unwrap();
    assert_eq!(band, HeightBand::new(10.0, 40.0, 100.0));
    assert_eq!(serde_json::to_string(&band).unwrap(), json);
}

#[test]
fn test_point_round_trips() {
    let point = Point::new(500.0, 62.5);
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, r#"{"x":500.0,"y":62.5}"#);
    let back: Point = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
}
