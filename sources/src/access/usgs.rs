//! USGS summary feeds are static files, one per minimum magnitude and period.
//!
//! See <https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php>.
//!

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Minimum magnitude of the feed
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    EnumString,
    ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    /// Significant quakes only
    Significant,
    /// M4.5+
    #[strum(serialize = "4.5")]
    #[value(name = "4.5")]
    M45,
    /// M2.5+
    #[strum(serialize = "2.5")]
    #[value(name = "2.5")]
    M25,
    /// M1.0+
    #[strum(serialize = "1.0")]
    #[value(name = "1.0")]
    M10,
    /// Everything
    #[default]
    All,
}

/// Time span of the feed, always ending now
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    EnumString,
    ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Period {
    Hour,
    Day,
    #[default]
    Week,
    Month,
}

/// Parameters for the `get` route of a `usgs` site
///
#[derive(Copy, Clone, Debug, Default)]
pub struct UsgsFeed {
    pub level: Level,
    pub period: Period,
}

impl UsgsFeed {
    pub fn new(level: Level, period: Period) -> Self {
        UsgsFeed { level, period }
    }

    /// Route placeholders
    ///
    pub fn params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("level".to_string(), self.level.to_string()),
            ("period".to_string(), self.period.to_string()),
        ])
    }
}
