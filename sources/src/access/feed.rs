//! Anonymous HTTP(S) feed
//!
//! One `GET` on one route of a site, returning the whole body.  The timeout covers the
//! complete request, body included.  There is no retry.
//!

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{info, trace};

use quakemap_formats::Format;

use crate::{AccessError, FetchError, Fetchable, Site, Stats};

/// Default timeout for one fetch
pub const DEF_TIMEOUT: Duration = Duration::from_secs(30);

/// Route used for fetching
pub const GET_ROUTE: &str = "get";

#[derive(Clone, Debug)]
pub struct Feed {
    /// Site name
    pub name: String,
    /// Input format
    pub format: Format,
    /// Complete URL
    pub url: String,
    pub timeout: Duration,
    client: Client,
}

impl Feed {
    /// Build a feed on the `get` route of `site`, with `params` filled into the route.
    /// Requests are sent with `agent` as `User-Agent`.
    ///
    #[tracing::instrument(skip(site), fields(site = %site.name))]
    pub fn new(
        site: &Site,
        params: &BTreeMap<String, String>,
        timeout: Duration,
        agent: &str,
    ) -> Result<Self, AccessError> {
        trace!("feed::new");

        let url = site.url(GET_ROUTE, params)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(agent)
            .build()
            .map_err(|e| AccessError::Client(e.to_string()))?;

        Ok(Feed {
            name: site.name.clone(),
            format: site.format(),
            url,
            timeout,
            client,
        })
    }

    /// Make sure we got the kind of data the caller can transform.
    ///
    pub fn expect(self, format: Format) -> Result<Self, AccessError> {
        if self.format != format {
            return Err(AccessError::WrongFormat(
                self.name,
                self.format.to_string(),
                format.to_string(),
            ));
        }
        Ok(self)
    }

    fn error(&self, e: reqwest::Error) -> FetchError {
        let site = self.name.clone();
        if e.is_timeout() {
            FetchError::Timeout {
                site,
                after: self.timeout,
            }
        } else if e.is_decode() || e.is_body() {
            FetchError::Decode {
                site,
                reason: e.to_string(),
            }
        } else {
            FetchError::Http {
                site,
                reason: e.to_string(),
            }
        }
    }
}

impl Fetchable for Feed {
    #[inline]
    fn name(&self) -> String {
        self.name.clone()
    }

    #[tracing::instrument(skip(self), fields(site = %self.name))]
    async fn fetch(&self) -> Result<String, FetchError> {
        trace!("GET {}", self.url);
        let start = Instant::now();

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                site: self.name.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| self.error(e))?;

        let stats = Stats {
            tm: start.elapsed().as_millis(),
            bytes: body.len() as u64,
            status: status.as_u16(),
        };
        info!(site = %self.name, %stats, "fetched");
        Ok(body)
    }

    #[inline]
    fn format(&self) -> Format {
        self.format
    }
}
