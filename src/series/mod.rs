//! From intensity records to a bounded point series.
//!
//! This module owns the input side of the pipeline:
//! - [`IntensityRecord`] carries one normalized density score
//! - [`HeightBand`] turns a pixel triple into the vertical clamp window
//! - [`build_points`] lays the records out across the output domain

mod band;
mod builder;
mod record;

pub use band::HeightBand;
pub use builder::{DOMAIN_HEIGHT, DOMAIN_WIDTH, build_points};
pub use record::IntensityRecord;
