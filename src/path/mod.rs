//! Path-data serialization.
//!
//! Turns a point sequence into the `d` attribute of an SVG `<path>`,
//! either as straight `L` segments or as smooth cubic `C` curves whose
//! control points follow the local tangent of the sequence.

mod command;
mod control;
mod serializer;

pub use command::PathCommand;
pub use control::{SMOOTHING, control_point};
pub use serializer::{heatmap_path, serialize_path};
