//! This library is there to share some common code amongst all quakemap modules.
//!
//! - `ConfigFile<T>`: versioned HCL configuration files in the default location
//! - `init_logging()`: `tracing` subscriber setup shared by the binaries
//!

use clap::{crate_name, crate_version};

pub use config::*;
pub use logging::*;

mod config;
mod logging;
mod macros;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Every configuration file has a `version` field, checked on load.
///
pub trait Versioned {
    fn version(&self) -> usize;
}
