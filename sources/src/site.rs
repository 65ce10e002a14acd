//!  Module that defines what is a site (website, API endpoint, etc.)
//!
//! This is used to configure the list of possible sources through `sources.hcl`.
//!
//! You can define a set of possible routes for a site depending on how the API/site is
//! designed.  A route can contain `{name}` placeholders filled in by `Site::url()`.
//!

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use quakemap_formats::Format;

use crate::AccessError;

/// Describe what a site is.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Site {
    /// Name of the site
    #[serde(skip_deserializing)]
    pub name: String,
    /// Type of input
    pub format: String,
    /// Base URL (to avoid repeating)
    pub base_url: String,
    /// Different URLs available
    pub routes: Option<BTreeMap<String, String>>,
}

impl Site {
    /// Basic `new()`
    ///
    pub fn new() -> Self {
        Site::default()
    }

    /// Return the site format, `Format::None` if unknown
    ///
    #[inline]
    pub fn format(&self) -> Format {
        Format::from_str(&self.format).unwrap_or_default()
    }

    /// Return the list of routes
    ///
    pub fn list(&self) -> Vec<&String> {
        match &self.routes {
            Some(routes) => routes.keys().collect::<Vec<_>>(),
            _ => vec![],
        }
    }

    /// Check whether site has the mentioned route
    ///
    pub fn has(&self, meth: &str) -> bool {
        match &self.routes {
            Some(routes) => routes.contains_key(meth),
            _ => false,
        }
    }

    /// Retrieve a route
    ///
    pub fn route(&self, key: &str) -> Option<&String> {
        match &self.routes {
            Some(routes) => routes.get(key),
            _ => None,
        }
    }

    /// Build the full URL for route `key`, replacing every `{name}` with its value in `params`.
    ///
    #[tracing::instrument(skip(self))]
    pub fn url(&self, key: &str, params: &BTreeMap<String, String>) -> Result<String, AccessError> {
        let route = self
            .route(key)
            .ok_or_else(|| AccessError::NoRoute(self.name.clone(), key.to_string()))?;

        let route = params
            .iter()
            .fold(route.clone(), |r, (k, v)| r.replace(&format!("{{{k}}}"), v));

        // Anything left is a parameter we have not been given
        //
        if let Some(start) = route.find('{') {
            let name = route[start + 1..]
                .split('}')
                .next()
                .unwrap_or_default()
                .to_string();
            return Err(AccessError::MissingParam(self.name.clone(), name));
        }

        let url = format!("{}{}", self.base_url, route);
        trace!("url={url}");
        Ok(url)
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ format={} url={} routes={:?} }}",
            self.format, self.base_url, self.routes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usgs() -> Site {
        Site {
            name: "quakes".to_string(),
            format: "usgs".to_string(),
            base_url: "https://earthquake.usgs.gov".to_string(),
            routes: Some(BTreeMap::from([(
                "get".to_string(),
                "/earthquakes/feed/v1.0/summary/{level}_{period}.geojson".to_string(),
            )])),
        }
    }

    #[test]
    fn test_site_format() {
        assert_eq!(Format::Usgs, usgs().format());
        assert_eq!(Format::None, Site::new().format());
    }

    #[test]
    fn test_site_routes() {
        let s = usgs();

        assert!(s.has("get"));
        assert!(!s.has("stream"));
        assert_eq!(vec!["get"], s.list());
        assert!(Site::new().list().is_empty());
    }

    #[test]
    fn test_site_url() {
        let params = BTreeMap::from([
            ("level".to_string(), "all".to_string()),
            ("period".to_string(), "week".to_string()),
        ]);
        let url = usgs().url("get", &params).unwrap();
        assert_eq!(
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson",
            url
        );
    }

    #[test]
    fn test_site_url_missing_param() {
        let params = BTreeMap::from([("level".to_string(), "all".to_string())]);
        let url = usgs().url("get", &params);
        assert!(matches!(url, Err(AccessError::MissingParam(_, p)) if p == "period"));
    }

    #[test]
    fn test_site_url_no_route() {
        let url = usgs().url("stream", &BTreeMap::new());
        assert!(matches!(url, Err(AccessError::NoRoute(..))));
    }
}
