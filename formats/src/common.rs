//! Common code and struct.
//!

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{FormatError, TransformError};

/// This structure hold a rendering position, latitude first.
///
/// GeoJSON uses `[longitude, latitude]`, the map wants `[latitude, longitude]`, hence the
/// explicit constructor from the GeoJSON order.
///
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct LatLon {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl LatLon {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    /// Build from a GeoJSON-ordered pair.
    ///
    #[inline]
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        LatLon { lat, lon }
    }

    /// Return the GeoJSON-ordered pair.
    ///
    #[inline]
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<LatLon> for [f64; 2] {
    fn from(value: LatLon) -> Self {
        [value.lat, value.lon]
    }
}

impl From<[f64; 2]> for LatLon {
    fn from(value: [f64; 2]) -> Self {
        LatLon::new(value[0], value[1])
    }
}

/// Popup content, an ordered list of `key: value` lines.  Escaping is left to the renderer.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Popup(Vec<(String, String)>);

impl Popup {
    pub fn new() -> Self {
        Popup::default()
    }

    /// Append a line.
    ///
    pub fn line(mut self, key: &str, value: impl Display) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Plain text version, one line per entry.
    ///
    pub fn text(&self) -> String {
        self.lines()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Outer GeoJSON document.  Features are kept as raw values so that each one can be decoded
/// (and fail) on its own.
///
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub ftype: String,
    pub features: Vec<Value>,
}

impl FeatureCollection {
    /// Parse a complete document and check its type.
    ///
    #[tracing::instrument(skip(input))]
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let fc: FeatureCollection = serde_json::from_str(input)?;
        if fc.ftype != "FeatureCollection" {
            return Err(FormatError::BadType(fc.ftype));
        }
        debug!("{} features", fc.features.len());
        Ok(fc)
    }
}

/// Result of a batch transform: what went through, in input order, and what did not.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Transformed<T> {
    pub items: Vec<T>,
    pub errors: Vec<TransformError>,
}

impl<T> Default for Transformed<T> {
    fn default() -> Self {
        Transformed {
            items: vec![],
            errors: vec![],
        }
    }
}

impl<T> Transformed<T> {
    /// Number of features skipped.
    ///
    #[inline]
    pub fn skipped(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Apply `f` on every feature independently, collecting successes and failures.  A bad
/// feature is logged and skipped, it never stops the batch.
///
pub fn transform_each<T, F>(features: &[Value], f: F) -> Transformed<T>
where
    F: Fn(usize, &Value) -> Result<T, TransformError>,
{
    let mut res = Transformed {
        items: Vec::with_capacity(features.len()),
        errors: vec![],
    };

    for (index, feature) in features.iter().enumerate() {
        match f(index, feature) {
            Ok(item) => res.items.push(item),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed feature");
                res.errors.push(e);
            }
        }
    }
    res
}

/// Decode one raw feature into its typed form, any serde failure becomes `Invalid`.
///
pub(crate) fn decode<T>(index: usize, value: &Value) -> Result<T, TransformError>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(value).map_err(|e| TransformError::Invalid {
        index,
        reason: e.to_string(),
    })
}
