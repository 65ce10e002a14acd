//! Tectonic plate boundaries, from Peter Bird's PB2002 model as packaged by
//! <https://github.com/fraxen/tectonicplates>.
//!
//! Each feature is a `LineString` with `[[longitude, latitude], ...]`, properties are `Name`
//! (e.g. `PA-NA`) and `Source` (citation of the digitized segment).
//!

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    FeatureCollection, FormatError, LatLon, Popup, Rgb, TransformError, Transformed, decode,
    transform_each,
};

/// Every boundary is drawn the same way, CSS `red`.
pub const PLATE_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const PLATE_OPACITY: f64 = 0.5;

#[derive(Debug, Deserialize)]
pub struct PlateFeature {
    pub geometry: Option<LineGeometry>,
    #[serde(default)]
    pub properties: PlateProperties,
}

#[derive(Debug, Deserialize)]
pub struct LineGeometry {
    /// `[longitude, latitude]` pairs
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlateProperties {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Source")]
    pub source: Option<String>,
}

/// One polyline on the map.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlateAnnotation {
    pub name: String,
    pub vertices: Vec<LatLon>,
    pub color: Rgb,
    pub opacity: f64,
    pub popup: Popup,
}

impl PlateAnnotation {
    /// Decode and transform a complete boundary file.
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_geojson(input: &str) -> Result<Transformed<Self>, FormatError> {
        let fc = FeatureCollection::parse(input)?;
        Ok(Self::from_features(&fc.features))
    }

    pub fn from_features(features: &[Value]) -> Transformed<Self> {
        let res = transform_each(features, |index, value| {
            let feature: PlateFeature = decode(index, value)?;
            Self::from_feature(index, feature)
        });
        debug!(plates = res.len(), skipped = res.skipped(), "plates transformed");
        res
    }

    pub fn from_feature(index: usize, feature: PlateFeature) -> Result<Self, TransformError> {
        let missing = |field| TransformError::MissingField { index, field };

        let coords = feature.geometry.ok_or(missing("geometry"))?.coordinates;
        let vertices = coords
            .iter()
            .enumerate()
            .map(|(n, v)| match v[..] {
                [lon, lat, ..] => Ok(LatLon::from_lon_lat(lon, lat)),
                _ => Err(TransformError::Invalid {
                    index,
                    reason: format!("vertex {n} has {} values", v.len()),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let props = feature.properties;
        let name = props.name.ok_or(missing("properties.Name"))?;
        let source = props.source.unwrap_or_else(|| "Unknown".to_string());

        let popup = Popup::new().line("Name", &name).line("Source", source);
        Ok(PlateAnnotation {
            name,
            vertices,
            color: PLATE_COLOR,
            opacity: PLATE_OPACITY,
            popup,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plate(name: &str, coords: Value) -> Value {
        json!({
            "type": "Feature",
            "properties": { "LAYER": "plate boundary", "Name": name, "Source": "USGS" },
            "geometry": { "type": "LineString", "coordinates": coords }
        })
    }

    #[test]
    fn test_plate_vertices_swapped() {
        let res = PlateAnnotation::from_features(&[plate("AF-AN", json!([[1, 2], [3, 4]]))]);

        assert_eq!(0, res.skipped());
        let p = &res.items[0];
        assert_eq!(vec![LatLon::new(2., 1.), LatLon::new(4., 3.)], p.vertices);
        assert_eq!(PLATE_COLOR, p.color);
        assert_eq!(PLATE_OPACITY, p.opacity);
        assert_eq!("Name: AF-AN\nSource: USGS", p.popup.text());
    }

    #[test]
    fn test_plate_keeps_order() {
        let features: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|n| plate(n, json!([[0, 0]])))
            .collect();
        let res = PlateAnnotation::from_features(&features);

        assert_eq!(
            vec!["A", "B", "C"],
            res.items.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_plate_style_is_constant() {
        let res = PlateAnnotation::from_features(&[
            plate("A", json!([[0, 0], [10, 10]])),
            plate("B", json!([[-170, 80], [170, -80]])),
        ]);

        assert!(res.items.iter().all(|p| p.color == PLATE_COLOR && p.opacity == PLATE_OPACITY));
    }

    #[test]
    fn test_plate_skip_malformed() {
        let features = vec![
            plate("bad-vertex", json!([[1, 2], [3]])),
            json!({ "properties": { "Name": "nogeom" } }),
            json!({ "geometry": { "coordinates": [[1, 2]] }, "properties": {} }),
            plate("good", json!([[5, 6]])),
        ];
        let res = PlateAnnotation::from_features(&features);

        assert_eq!(1, res.len());
        assert_eq!("good", res.items[0].name);
        assert_eq!(3, res.skipped());
        assert!(matches!(res.errors[0], TransformError::Invalid { index: 0, .. }));
        assert_eq!(
            TransformError::MissingField {
                index: 2,
                field: "properties.Name"
            },
            res.errors[2]
        );
    }

    #[test]
    fn test_plate_missing_source() {
        let f = json!({ "geometry": { "coordinates": [[1, 2]] }, "properties": { "Name": "X" } });
        let res = PlateAnnotation::from_features(&[f]);

        assert_eq!("Name: X\nSource: Unknown", res.items[0].popup.text());
    }

    #[test]
    fn test_plate_from_geojson() {
        let input = json!({
            "type": "FeatureCollection",
            "features": [plate("Pacific", json!([[-120, 35], [-121, 36]]))]
        })
        .to_string();
        let res = PlateAnnotation::from_geojson(&input).unwrap();

        assert_eq!(
            vec![LatLon::new(35., -120.), LatLon::new(36., -121.)],
            res.items[0].vertices
        );
    }
}
