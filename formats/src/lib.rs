//! Definition of the data formats
//!
//! This module makes the link between the raw GeoJSON documents we fetch and the annotations
//! we draw:
//!
//! - `usgs`: earthquakes (points) into `QuakeAnnotation`
//! - `pb2002`: plate boundaries (lines) into `PlateAnnotation`
//!
//! Transformation is done feature by feature, a malformed one is skipped and reported in
//! `Transformed::errors` instead of failing the whole document.
//!
//! Coordinates are swapped from the GeoJSON `[longitude, latitude]` into `LatLon`.
//!

// Re-export for convenience
//
pub use common::*;
pub use encoding::*;
pub use error::*;
pub use format::*;
pub use pb2002::*;
pub use time::*;
pub use usgs::*;

mod common;
mod encoding;
mod error;
mod format;
mod pb2002;
mod time;
mod usgs;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
