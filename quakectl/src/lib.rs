//! Library part of the `quakectl` utility.
//!
//! It glues together the two sources (USGS earthquakes and PB2002 plate boundaries), the
//! transformers from `quakemap-formats` and the map composer.  Both datasets are fetched
//! concurrently and the map is only composed once both are there; the first failure wins and
//! no partial map is ever produced.
//!
//! The composed `Map` is then rendered either as a standalone HTML page or as JSON.
//!

use clap::ValueEnum;
use serde::Serialize;

/// Re-export
///
pub use cli::*;
pub use cmds::*;
pub use compose::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use render::*;

mod cli;
mod cmds;
mod compose;
mod config;
mod error;
mod map;
mod render;

/// How to render the composed map.
///
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, strum::Display, strum::EnumString, ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Output {
    /// Standalone Leaflet page
    #[default]
    Html,
    /// Map description
    Json,
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
