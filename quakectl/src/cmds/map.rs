//! This is the module handling the `map` sub-command.
//!

use std::time::Duration;

use eyre::Result;
use jiff::tz::TimeZone;
use tracing::{info, trace};

use quakemap_formats::Format;
use quakemap_sources::{Feed, Sources, UsgsFeed};

use crate::{Config, MapOpts, compose_map, render};

use super::write_output;

/// Fetch both sources, compose and render the map.
///
#[tracing::instrument(skip_all)]
pub async fn build_map(cfg: &Config, srcs: &Sources, mopts: &MapOpts) -> Result<()> {
    trace!("build_map");

    let tiles = cfg.tiles(mopts.api_key.clone());
    let timeout = Duration::from_secs(mopts.feed.timeout);
    let params = UsgsFeed::new(mopts.feed.level, mopts.feed.period).params();
    let agent = crate::version();

    let quakes =
        Feed::new(srcs.site(&mopts.quakes)?, &params, timeout, &agent)?.expect(Format::Usgs)?;
    let plates =
        Feed::new(srcs.site(&mopts.plates)?, &params, timeout, &agent)?.expect(Format::Pb2002)?;

    let tz = if mopts.utc {
        TimeZone::UTC
    } else {
        TimeZone::system()
    };

    info!("Building map from {} and {}", quakes.url, plates.url);
    let map = compose_map(&tiles, &quakes, &plates, &tz).await?;

    let data = render(&map, mopts.format)?;
    write_output(mopts.output.as_deref(), &data)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fs;

    use httpmock::prelude::*;
    use serde_json::{Value, json};
    use tempfile::NamedTempFile;

    use quakemap_sources::{GET_ROUTE, Level, Period, Site};

    use crate::{FeedOpts, Output, TileConfig};

    use super::*;

    fn site(name: &str, format: &str, base_url: String, route: &str) -> (String, Site) {
        let site = Site {
            name: name.to_string(),
            format: format.to_string(),
            base_url,
            routes: Some(BTreeMap::from([(GET_ROUTE.to_string(), route.to_string())])),
        };
        (name.to_string(), site)
    }

    fn opts(output: &NamedTempFile) -> MapOpts {
        MapOpts {
            api_key: None,
            format: Output::Json,
            output: Some(output.path().to_path_buf()),
            quakes: "quakes".to_string(),
            plates: "plates".to_string(),
            utc: true,
            feed: FeedOpts {
                level: Level::M25,
                period: Period::Day,
                timeout: 5,
            },
        }
    }

    #[tokio::test]
    async fn test_build_map_from_server() {
        let server = MockServer::start_async().await;
        let mq = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/summary/2.5_day.geojson")
                    .header("user-agent", crate::version());
                then.status(200).json_body(json!({
                    "type": "FeatureCollection",
                    "features": [{
                        "type": "Feature",
                        "id": "eq1",
                        "geometry": { "type": "Point", "coordinates": [-122.4, 37.8, 10.0] },
                        "properties": { "mag": 4.5, "place": "X", "time": 1_700_000_000_000i64 }
                    }]
                }));
            })
            .await;
        let mp = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/PB2002_boundaries.json")
                    .header("user-agent", crate::version());
                then.status(200).json_body(json!({
                    "type": "FeatureCollection",
                    "features": [{
                        "type": "Feature",
                        "geometry": { "type": "LineString", "coordinates": [[-120, 35], [-121, 36]] },
                        "properties": { "Name": "Pacific", "Source": "Bird 2003" }
                    }]
                }));
            })
            .await;

        let srcs = Sources::from(vec![
            site("quakes", "usgs", server.base_url(), "/summary/{level}_{period}.geojson"),
            site("plates", "pb2002", server.base_url(), "/PB2002_boundaries.json"),
        ]);
        let cfg = Config {
            version: 1,
            tiles: TileConfig::new("pk.foo"),
        };
        let out = NamedTempFile::new().unwrap();

        build_map(&cfg, &srcs, &opts(&out)).await.unwrap();

        mq.assert_async().await;
        mp.assert_async().await;

        let v: Value = serde_json::from_str(&fs::read_to_string(out.path()).unwrap()).unwrap();
        let quake = &v["overlays"]["quakes"]["items"][0];
        assert_eq!("eq1", quake["id"]);
        assert_eq!(235000., quake["radius"]);
        assert_eq!(json!(["Time", "11/14/2023, 10:13:20 PM UTC"]), quake["popup"][3]);
        assert_eq!(
            json!([[35.0, -120.0], [36.0, -121.0]]),
            v["overlays"]["plates"]["items"][0]["vertices"]
        );
    }

    #[tokio::test]
    async fn test_build_map_plate_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/summary/2.5_day.geojson");
                then.status(200).body(r#"{"type":"FeatureCollection","features":[]}"#);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/PB2002_boundaries.json");
                then.status(404);
            })
            .await;

        let srcs = Sources::from(vec![
            site("quakes", "usgs", server.base_url(), "/summary/{level}_{period}.geojson"),
            site("plates", "pb2002", server.base_url(), "/PB2002_boundaries.json"),
        ]);
        let cfg = Config {
            version: 1,
            tiles: TileConfig::new("pk.foo"),
        };
        let out = NamedTempFile::new().unwrap();

        let res = build_map(&cfg, &srcs, &opts(&out)).await;

        assert!(res.is_err());
        assert!(fs::read_to_string(out.path()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_map_wrong_format() {
        let srcs = Sources::from(vec![
            site("quakes", "pb2002", "http://127.0.0.1:1".to_string(), "/q.json"),
            site("plates", "pb2002", "http://127.0.0.1:1".to_string(), "/p.json"),
        ]);
        let out = NamedTempFile::new().unwrap();

        let res = build_map(&Config::default(), &srcs, &opts(&out)).await;

        assert!(res.is_err());
    }
}
