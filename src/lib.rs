//! Heatline - heatmap density curves as SVG path data
//!
//! This library turns a series of normalized intensity readings into the
//! `d` attribute of an SVG `<path>`, drawn inside a fixed `1000x100`
//! viewBox. The pipeline has two halves: [`build_points`] places one point
//! per reading (plus baseline anchors at both ends), and
//! [`serialize_path`] walks the points emitting either straight-line or
//! smooth cubic-bezier commands. [`heatmap_path`] runs both in one call.
//!
//! ```
//! use heatline::{HeightBand, IntensityRecord, heatmap_path};
//!
//! let records = [
//!     IntensityRecord::new(0.2),
//!     IntensityRecord::new(0.9),
//!     IntensityRecord::new(0.4),
//! ];
//! let band = HeightBand::new(10.0, 40.0, 100.0);
//!
//! let d = heatmap_path(&records, band, true, true);
//! assert!(d.starts_with("M 0.0,100.0 C"));
//! ```

pub mod geometry;
pub mod path;
pub mod series;

// Re-export commonly used types at the crate root
pub use geometry::{Point, Vector, clamp};
pub use path::{PathCommand, SMOOTHING, control_point, heatmap_path, serialize_path};
pub use series::{DOMAIN_HEIGHT, DOMAIN_WIDTH, HeightBand, IntensityRecord, build_points};
