use serde::{Deserialize, Serialize};
use strum::EnumString;

/// The `Format` enum represents the input formats we know how to transform.
///
/// It is referenced by name from each site in `sources.hcl`.
///
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Eq,
    strum::Display,
    EnumString,
    strum::VariantNames,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    None,
    /// USGS GeoJSON summary feed, earthquakes as points
    Usgs,
    /// PB2002 plate boundaries as GeoJSON lines
    Pb2002,
}

impl Format {
    /// One-line description for listings.
    ///
    pub fn description(&self) -> &'static str {
        match self {
            Format::None => "no format",
            Format::Usgs => "USGS earthquake summary feed (GeoJSON points)",
            Format::Pb2002 => "PB2002 tectonic plate boundaries (GeoJSON lines)",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("usgs", Format::Usgs)]
    #[case("USGS", Format::Usgs)]
    #[case("pb2002", Format::Pb2002)]
    #[case("none", Format::None)]
    fn test_format_from_str(#[case] s: &str, #[case] f: Format) {
        assert_eq!(f, Format::from_str(s).unwrap());
    }

    #[test]
    fn test_format_unknown() {
        assert!(Format::from_str("asd").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!("pb2002", Format::Pb2002.to_string());
    }
}
