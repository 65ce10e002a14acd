//! USGS earthquake summary feed.
//!
//! Each feature is a `Point` with `[longitude, latitude, depth]` and the properties we use are
//! `mag` (nullable), `place` (nullable) and `time` (epoch in ms).
//!
//! See <https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php>.
//!

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    FeatureCollection, FormatError, LatLon, Popup, Rgb, TransformError, Transformed, decode,
    depth_to_color, format_time, magnitude_to_radius, transform_each,
};

/// Fill opacity of every quake circle.
pub const QUAKE_FILL_OPACITY: f64 = 0.3;

/// Raw feature as sent by USGS, every field we need is optional here and checked later.
///
#[derive(Debug, Deserialize)]
pub struct QuakeFeature {
    pub id: Option<String>,
    pub geometry: Option<PointGeometry>,
    #[serde(default)]
    pub properties: QuakeProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    /// longitude, latitude, depth (km)
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuakeProperties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Epoch in ms
    pub time: Option<i64>,
}

/// One circle on the map.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuakeAnnotation {
    pub id: String,
    pub position: LatLon,
    /// km
    pub depth: f64,
    pub magnitude: f64,
    /// Used for both stroke & fill
    pub color: Rgb,
    pub fill_opacity: f64,
    /// meters
    pub radius: f64,
    pub popup: Popup,
}

impl QuakeAnnotation {
    /// Decode and transform a complete feed.
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_geojson(input: &str, tz: &TimeZone) -> Result<Transformed<Self>, FormatError> {
        let fc = FeatureCollection::parse(input)?;
        Ok(Self::from_features(&fc.features, tz))
    }

    /// Transform every feature, keeping the input order.  Malformed features are skipped.
    ///
    pub fn from_features(features: &[Value], tz: &TimeZone) -> Transformed<Self> {
        let res = transform_each(features, |index, value| {
            let feature: QuakeFeature = decode(index, value)?;
            Self::from_feature(index, feature, tz)
        });
        debug!(quakes = res.len(), skipped = res.skipped(), "quakes transformed");
        res
    }

    /// Transform one raw feature.
    ///
    pub fn from_feature(
        index: usize,
        feature: QuakeFeature,
        tz: &TimeZone,
    ) -> Result<Self, TransformError> {
        let missing = |field| TransformError::MissingField { index, field };

        let id = feature.id.ok_or(missing("id"))?;
        let coords = feature.geometry.ok_or(missing("geometry"))?.coordinates;
        let (lon, lat, depth) = match coords[..] {
            [lon, lat, depth, ..] => (lon, lat, depth),
            [_, _] => return Err(missing("geometry.coordinates[2]")),
            _ => return Err(missing("geometry.coordinates")),
        };

        let props = feature.properties;
        let time = props.time.ok_or(missing("properties.time"))?;
        let time_str = format_time(time, tz).ok_or(TransformError::BadTime { index, time })?;

        // A quake without a computed magnitude yet is shown as a 0.
        let magnitude = props.mag.unwrap_or(0.);
        let place = props.place.unwrap_or_else(|| "Unknown".to_string());

        let popup = Popup::new()
            .line("ID", &id)
            .line("Place", &place)
            .line("Magnitude", magnitude)
            .line("Time", time_str);

        Ok(QuakeAnnotation {
            id,
            position: LatLon::from_lon_lat(lon, lat),
            depth,
            magnitude,
            color: depth_to_color(depth),
            fill_opacity: QUAKE_FILL_OPACITY,
            radius: magnitude_to_radius(magnitude),
            popup,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn quake(id: &str, coords: Value, mag: Value) -> Value {
        json!({
            "type": "Feature",
            "id": id,
            "geometry": { "type": "Point", "coordinates": coords },
            "properties": { "mag": mag, "place": "Bay Area", "time": 1_700_000_000_000i64 }
        })
    }

    #[test]
    fn test_quake_transform_one() {
        let f = quake("eq1", json!([-122.4, 37.8, 10.]), json!(4.5));
        let res = QuakeAnnotation::from_features(&[f], &TimeZone::UTC);

        assert_eq!(0, res.skipped());
        let q = &res.items[0];
        assert_eq!("eq1", q.id);
        assert_eq!(LatLon::new(37.8, -122.4), q.position);
        assert_eq!(235_000., q.radius);
        assert_eq!(depth_to_color(10.), q.color);
        assert_eq!(QUAKE_FILL_OPACITY, q.fill_opacity);
        assert_eq!(
            "ID: eq1\nPlace: Bay Area\nMagnitude: 4.5\nTime: 11/14/2023, 10:13:20 PM UTC",
            q.popup.text()
        );
    }

    #[test]
    fn test_quake_transform_keeps_order() {
        let features: Vec<_> = (0..20)
            .map(|i| quake(&format!("eq{i}"), json!([i as f64, -(i as f64), 5.]), json!(1.)))
            .collect();
        let res = QuakeAnnotation::from_features(&features, &TimeZone::UTC);

        assert_eq!(features.len(), res.len());
        for (i, q) in res.items.iter().enumerate() {
            assert_eq!(format!("eq{i}"), q.id);
            assert_eq!(LatLon::from_lon_lat(i as f64, -(i as f64)), q.position);
        }
    }

    #[test]
    fn test_quake_null_magnitude() {
        let f = quake("eq2", json!([0., 0., 0.]), Value::Null);
        let res = QuakeAnnotation::from_features(&[f], &TimeZone::UTC);

        assert_eq!(1, res.len());
        assert_eq!(10_000., res.items[0].radius);
        assert_eq!(0., res.items[0].magnitude);
    }

    #[test]
    fn test_quake_null_place() {
        let f = json!({
            "id": "eq3",
            "geometry": { "coordinates": [1., 2., 3.] },
            "properties": { "mag": 1.2, "place": null, "time": 0 }
        });
        let res = QuakeAnnotation::from_features(&[f], &TimeZone::UTC);

        assert!(res.items[0].popup.text().contains("Place: Unknown"));
    }

    #[test]
    fn test_quake_skip_malformed() {
        let features = vec![
            quake("ok1", json!([1., 2., 3.]), json!(1.)),
            quake("short", json!([1., 2.]), json!(1.)),
            json!({ "id": "nogeom", "properties": { "time": 0 } }),
            json!({ "geometry": { "coordinates": [1., 2., 3.] }, "properties": { "time": 0 } }),
            json!({ "id": "notime", "geometry": { "coordinates": [1., 2., 3.] } }),
            quake("text", json!(["a", "b", "c"]), json!(1.)),
            quake("ok2", json!([4., 5., 6.]), json!(2.)),
        ];
        let res = QuakeAnnotation::from_features(&features, &TimeZone::UTC);

        assert_eq!(vec!["ok1", "ok2"], res.items.iter().map(|q| q.id.as_str()).collect::<Vec<_>>());
        assert_eq!(5, res.skipped());
        assert_eq!(
            TransformError::MissingField {
                index: 1,
                field: "geometry.coordinates[2]"
            },
            res.errors[0]
        );
        assert_eq!(
            vec![1, 2, 3, 4, 5],
            res.errors.iter().map(|e| e.index()).collect::<Vec<_>>()
        );
        assert!(matches!(res.errors[4], TransformError::Invalid { index: 5, .. }));
    }

    #[test]
    fn test_quake_bad_time() {
        let f = json!({
            "id": "late",
            "geometry": { "coordinates": [1., 2., 3.] },
            "properties": { "time": i64::MAX }
        });
        let res = QuakeAnnotation::from_features(&[f], &TimeZone::UTC);

        assert_eq!(
            vec![TransformError::BadTime {
                index: 0,
                time: i64::MAX
            }],
            res.errors
        );
    }

    #[test]
    fn test_quake_from_geojson() {
        let input = json!({
            "type": "FeatureCollection",
            "metadata": { "title": "USGS All Earthquakes, Past Week" },
            "features": [quake("eq1", json!([-122.4, 37.8, 10.]), json!(4.5))]
        })
        .to_string();
        let res = QuakeAnnotation::from_geojson(&input, &TimeZone::UTC).unwrap();

        assert_eq!(1, res.len());
    }
}
