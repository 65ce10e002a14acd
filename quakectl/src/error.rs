//! Error module
//!

use thiserror::Error;

use quakemap_common::ConfigFileError;
use quakemap_sources::FetchError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key for the tile provider, use --api-key, MAPBOX_API_KEY or tiles.api_key")]
    MissingApiKey,
    #[error(transparent)]
    File(#[from] ConfigFileError),
}

/// Why no map was built.
///
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}
