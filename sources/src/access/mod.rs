//! Access methods
//!
//! - `feed`: anonymous HTTP GET returning one complete document
//! - `usgs`: route parameters for the USGS summary feeds
//!

pub use feed::*;
pub use usgs::*;

mod feed;
mod usgs;
