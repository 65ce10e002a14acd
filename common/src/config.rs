//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the configuration files of
//! `quakemap`.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or the default one.
//!
//! This encapsulates the configuration file, available with `.inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{Versioned, makepath};

/// Main name for the directory base
pub const TAG: &str = "quakemap";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Unknown config file {0:?}")]
    NotFound(PathBuf),
    #[error("Can not read {0:?}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("Can not parse {0:?}: {1}")]
    Parse(PathBuf, hcl::Error),
    #[error("Bad config file version v{0}, need v{1}")]
    BadVersion(usize, usize),
}

/// Versioned configuration file, parsed as HCL into `T`.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// File actually loaded.
    path: PathBuf,
    inner: T,
}

/// Return the default configuration directory for `tag`, i.e. `$HOME/.config/<tag>` on UNIX
/// and `%LOCALAPPDATA%\<tag>` on Windows.
///
#[tracing::instrument]
pub fn config_dir(tag: &str) -> PathBuf {
    match BaseDirs::new() {
        Some(base) => {
            #[cfg(unix)]
            let base = base.home_dir().join(".config");

            #[cfg(windows)]
            let base = base.data_local_dir().to_path_buf();

            debug!("base = {base:?}");
            makepath!(base, tag)
        }
        // No home directory at all, use the current one.
        None => makepath!(".", tag),
    }
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    /// Returns the path of the default config file named `fname` for `tag`
    ///
    pub fn default_file(tag: &str, fname: &str) -> PathBuf {
        config_dir(tag).join(fname)
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (base on $HOME or $LOCALAPPDATA)
    ///
    /// The `version` field must be equal to `want`.
    ///
    #[tracing::instrument]
    pub fn load(
        tag: &str,
        fname: Option<&Path>,
        default: &str,
        want: usize,
    ) -> Result<ConfigFile<T>, ConfigFileError> {
        let path = match fname {
            Some(fname) => fname.to_path_buf(),
            None => config_dir(tag).join(default),
        };

        if !path.exists() {
            return Err(ConfigFileError::NotFound(path));
        }
        trace!("Loading config file {path:?}");

        let data = fs::read_to_string(&path).map_err(|e| ConfigFileError::Read(path.clone(), e))?;
        let inner = Self::parse(&path, &data)?;
        if inner.version() != want {
            return Err(ConfigFileError::BadVersion(inner.version(), want));
        }
        debug!("struct data = {inner:?}");

        Ok(ConfigFile { path, inner })
    }

    /// Parse HCL data, `path` is only used for error reporting.
    ///
    pub fn parse(path: &Path, data: &str) -> Result<T, ConfigFileError> {
        hcl::from_str(data).map_err(|e| ConfigFileError::Parse(path.to_path_buf(), e))
    }

    /// Returns the file that was loaded
    ///
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the inner configuration
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consume the wrapper and return the inner configuration
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}
