//! This is the exposed part of the `quakemap-sources` API.
//!
//! `sources.hcl` lists every site we can fetch from.  A default copy is compiled in so the
//! tool works out of the box, a file in the configuration directory (or given explicitly)
//! takes precedence.
//!

use std::collections::BTreeMap;
use std::collections::btree_map::Keys;
use std::path::Path;

use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{debug, trace};

use quakemap_common::{ConfigFile, ConfigFileError, TAG, Versioned};

use crate::{AccessError, SOURCES_CONFIG, Site};

/// Current `sources.hcl` version
pub const SVERSION: usize = 1;

/// Default content of `sources.hcl`
const DEF_SOURCES: &str = include_str!("sources.hcl");

/// On-disk format of `sources.hcl`
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SourcesConfig {
    version: usize,
    #[serde(default)]
    site: BTreeMap<String, Site>,
}

impl Versioned for SourcesConfig {
    fn version(&self) -> usize {
        self.version
    }
}

/// All known sites, indexed by name.
///
#[derive(Clone, Debug, Default)]
pub struct Sources {
    site: BTreeMap<String, Site>,
}

impl From<SourcesConfig> for Sources {
    fn from(value: SourcesConfig) -> Self {
        let site = value
            .site
            .into_iter()
            .map(|(n, mut s)| {
                s.name = n.clone();
                (n, s)
            })
            .collect();
        Sources { site }
    }
}

impl Sources {
    /// Load `fname` if given, else the one in the configuration directory if present, else the
    /// compiled-in defaults.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Self, AccessError> {
        let def = ConfigFile::<SourcesConfig>::default_file(TAG, SOURCES_CONFIG);

        let cfg = match fname {
            Some(fname) => ConfigFile::<SourcesConfig>::load(TAG, Some(fname), SOURCES_CONFIG, SVERSION)?
                .into_inner(),
            None if def.exists() => {
                ConfigFile::<SourcesConfig>::load(TAG, None, SOURCES_CONFIG, SVERSION)?.into_inner()
            }
            None => {
                debug!("no {def:?}, using defaults");
                return Self::builtin();
            }
        };
        trace!("{} sites", cfg.site.len());
        Ok(Sources::from(cfg))
    }

    /// Compiled-in sites
    ///
    pub fn builtin() -> Result<Self, AccessError> {
        Ok(Sources::from(Self::defaults()?))
    }

    fn defaults() -> Result<SourcesConfig, AccessError> {
        let cfg = ConfigFile::<SourcesConfig>::parse(Path::new(SOURCES_CONFIG), DEF_SOURCES)?;
        if cfg.version != SVERSION {
            return Err(ConfigFileError::BadVersion(cfg.version, SVERSION).into());
        }
        Ok(cfg)
    }

    /// Return the site called `name`
    ///
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Site> {
        self.site.get(name)
    }

    /// Same but as an error if not found
    ///
    pub fn site(&self, name: &str) -> Result<&Site, AccessError> {
        self.get(name)
            .ok_or_else(|| AccessError::UnknownSite(name.to_string()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.site.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, String, Site> {
        self.site.keys()
    }

    /// List of currently known sources into a nicely formatted string.
    ///
    #[tracing::instrument(skip(self))]
    pub fn list(&self) -> String {
        let header = vec!["Name", "Format", "URL", "Routes"];

        let mut builder = Builder::default();
        builder.push_record(header);

        self.site.iter().for_each(|(n, s)| {
            let routes = s
                .list()
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            builder.push_record(vec![
                n.clone(),
                s.format().to_string(),
                s.base_url.clone(),
                routes,
            ]);
        });

        let table = builder.build().with(Style::rounded()).to_string();
        format!("Listing all sources:\n{table}")
    }
}

impl From<Vec<(String, Site)>> for Sources {
    fn from(value: Vec<(String, Site)>) -> Self {
        Sources {
            site: value.into_iter().collect(),
        }
    }
}
