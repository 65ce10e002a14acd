//! Fetch both datasets and compose the map.
//!
//! Each source gets its own pipeline (fetch then transform), both run concurrently and are
//! joined with `try_join!`: the first error drops the other pipeline and nothing is composed.
//!

use jiff::tz::TimeZone;
use tracing::{info, trace, warn};

use quakemap_formats::{PlateAnnotation, QuakeAnnotation, Transformed};
use quakemap_sources::{FetchError, Fetchable};

use crate::{ComposeError, Map, MapComposer, TileConfig};

/// Both transformed datasets, only ever built when both fetches succeeded.
///
#[derive(Debug)]
pub struct Layers {
    pub quakes: Transformed<QuakeAnnotation>,
    pub plates: Transformed<PlateAnnotation>,
}

/// A document we can not even parse is a failure of the fetch, not of one feature.
///
fn undecodable(site: &impl Fetchable, e: impl ToString) -> FetchError {
    FetchError::Decode {
        site: site.name(),
        reason: e.to_string(),
    }
}

/// Per-dataset summary, visible at the default level as soon as something was dropped.
///
fn report<T>(site: &impl Fetchable, res: &Transformed<T>) {
    if res.skipped() > 0 {
        warn!(
            site = %site.name(),
            kept = res.len(),
            skipped = res.skipped(),
            "malformed features skipped"
        );
    } else {
        info!(site = %site.name(), kept = res.len(), "ready");
    }
}

#[tracing::instrument(skip_all, fields(site = %site.name()))]
async fn quake_pipeline<F: Fetchable>(
    site: &F,
    tz: &TimeZone,
) -> Result<Transformed<QuakeAnnotation>, FetchError> {
    let body = site.fetch().await?;
    let res = QuakeAnnotation::from_geojson(&body, tz).map_err(|e| undecodable(site, e))?;
    report(site, &res);
    Ok(res)
}

#[tracing::instrument(skip_all, fields(site = %site.name()))]
async fn plate_pipeline<F: Fetchable>(site: &F) -> Result<Transformed<PlateAnnotation>, FetchError> {
    let body = site.fetch().await?;
    let res = PlateAnnotation::from_geojson(&body).map_err(|e| undecodable(site, e))?;
    report(site, &res);
    Ok(res)
}

/// Run both pipelines concurrently and wait for both.
///
#[tracing::instrument(skip_all)]
pub async fn gather<Q, P>(quakes: &Q, plates: &P, tz: &TimeZone) -> Result<Layers, FetchError>
where
    Q: Fetchable,
    P: Fetchable,
{
    trace!("gather");

    let (quakes, plates) = tokio::try_join!(quake_pipeline(quakes, tz), plate_pipeline(plates))?;
    Ok(Layers { quakes, plates })
}

/// Complete run: check the tile configuration, fetch & transform both sources then compose.
///
/// The composer is built first so a missing key fails before anything goes on the network.
///
#[tracing::instrument(skip(quakes, plates, tz))]
pub async fn compose_map<Q, P>(
    tiles: &TileConfig,
    quakes: &Q,
    plates: &P,
    tz: &TimeZone,
) -> Result<Map, ComposeError>
where
    Q: Fetchable,
    P: Fetchable,
{
    let composer = MapComposer::new(tiles)?;
    let layers = gather(quakes, plates, tz).await?;
    Ok(composer.compose(layers))
}
