//! This is the module handling the `fetch` sub-command.
//!

use std::time::Duration;

use eyre::Result;
use tracing::{info, trace};

use quakemap_sources::{Feed, Fetchable, Sources, UsgsFeed};

use crate::FetchOpts;

use super::write_output;

/// Raw dump of one site, nothing is transformed.
///
#[tracing::instrument(skip(srcs))]
pub async fn fetch_from_site(srcs: &Sources, fopts: &FetchOpts) -> Result<()> {
    trace!("fetch_from_site({:?})", fopts.site);

    let site = srcs.site(&fopts.site)?;
    let params = UsgsFeed::new(fopts.feed.level, fopts.feed.period).params();
    let timeout = Duration::from_secs(fopts.feed.timeout);
    let feed = Feed::new(site, &params, timeout, &crate::version())?;

    info!("Fetching from network site {}", feed.name());

    let data = feed.fetch().await?;
    write_output(fopts.output.as_deref(), &data)
}
