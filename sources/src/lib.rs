//! Module to deal with the different sources we fetch data from.
//!
//! Every source is a `Site` from `sources.hcl`, turned into something `Fetchable`:
//!
//! - `Feed`: a plain anonymous HTTP GET on one route of the site, with a timeout.
//!
//! The USGS feed takes a `Level` and a `Period` to build its route.
//!

use std::fmt::{Display, Formatter};

use serde::Serialize;

use quakemap_formats::Format;

// Re-export these modules for a shorted import path.
//
pub use access::*;
pub use config::*;
pub use error::*;
pub use site::*;

mod access;
mod config;
mod error;
mod site;

/// Default configuration filename
pub const SOURCES_CONFIG: &str = "sources.hcl";

/// Statistics gathering struct for one fetch
///
#[derive(Clone, Debug, Default, Serialize)]
pub struct Stats {
    /// Elapsed time in ms
    pub tm: u128,
    pub bytes: u64,
    pub status: u16,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "time={}ms bytes={} status={}",
            self.tm, self.bytes, self.status
        )
    }
}

/// This trait enables us to manage the different ways of fetching data under a single
/// interface.  Everything is anonymous so there is no `authenticate()`.
///
#[allow(async_fn_in_trait)]
pub trait Fetchable {
    /// Return site's name
    fn name(&self) -> String;
    /// Fetch the whole document
    async fn fetch(&self) -> Result<String, FetchError>;
    /// Returns the input formats
    fn format(&self) -> Format;
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
