//! Configuration for `quakectl`.
//!
//! The only thing we need is the access token of the tile provider:
//!
//! ```hcl
//! version = 1
//!
//! tiles {
//!   api_key = "pk.XXXX"
//! }
//! ```
//!

use std::fmt::{Debug, Formatter};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use quakemap_common::{ConfigFile, TAG, Versioned};

use crate::ConfigError;

/// Config filename
pub const CONFIG: &str = "config.hcl";
/// Current version
pub const CVERSION: usize = 1;

/// Configuration for the CLI tool.
///
#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: usize,
    /// Tile provider
    #[serde(default)]
    pub tiles: TileConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CVERSION,
            tiles: TileConfig::default(),
        }
    }
}

impl Versioned for Config {
    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Load the given file, or the default one if it exists.  Having no file at all is fine,
    /// the key can come from elsewhere.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Self, ConfigError> {
        let def = ConfigFile::<Config>::default_file(TAG, CONFIG);
        if fname.is_none() && !def.exists() {
            debug!("no {def:?}, empty configuration");
            return Ok(Config::default());
        }
        let cfg = ConfigFile::<Config>::load(TAG, fname, CONFIG, CVERSION)?;
        Ok(cfg.into_inner())
    }

    /// Merge the key given on the command line (or environment), it wins over the file.
    ///
    pub fn tiles(&self, api_key: Option<String>) -> TileConfig {
        match api_key {
            Some(api_key) => TileConfig {
                api_key: Some(api_key),
            },
            None => self.tiles.clone(),
        }
    }
}

/// Tile provider settings, given explicitly to the map composer.
///
#[derive(Clone, Default, Deserialize)]
pub struct TileConfig {
    pub api_key: Option<String>,
}

impl TileConfig {
    pub fn new(api_key: &str) -> Self {
        TileConfig {
            api_key: Some(api_key.to_string()),
        }
    }

    /// Return the key if present and not blank
    ///
    pub fn key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}

impl Debug for TileConfig {
    /// Obfuscate the key
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let key = self.api_key.as_ref().map(|_| "HIDDEN");
        f.debug_struct("TileConfig").field("api_key", &key).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use quakemap_common::ConfigFileError;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_config_load_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "version = 1\ntiles {{\n  api_key = \"pk.foo\"\n}}").unwrap();

        let cfg = Config::load(Some(f.path())).unwrap();
        assert_eq!("pk.foo", cfg.tiles.key().unwrap());
    }

    #[test]
    fn test_config_load_no_tiles() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "version = 1").unwrap();

        let cfg = Config::load(Some(f.path())).unwrap();
        assert!(matches!(cfg.tiles.key(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_config_bad_version() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "version = 2").unwrap();

        let cfg = Config::load(Some(f.path()));
        assert!(matches!(
            cfg,
            Err(ConfigError::File(ConfigFileError::BadVersion(2, 1)))
        ));
    }

    #[test]
    fn test_config_cli_key_wins() {
        let cfg = Config {
            version: 1,
            tiles: TileConfig::new("from-file"),
        };

        assert_eq!("from-cli", cfg.tiles(Some("from-cli".into())).key().unwrap());
        assert_eq!("from-file", cfg.tiles(None).key().unwrap());
    }

    #[test]
    fn test_tiles_blank_key() {
        assert!(TileConfig::new("  ").key().is_err());
        assert!(TileConfig::default().key().is_err());
    }

    #[test]
    fn test_tiles_debug_hides_key() {
        let s = format!("{:?}", TileConfig::new("pk.secret"));
        assert!(!s.contains("pk.secret"));
        assert!(s.contains("HIDDEN"));
    }
}
