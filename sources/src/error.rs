use std::time::Duration;

use thiserror::Error;

/// Custom error type for fetching, allow us to differentiate between errors.  Every variant
/// names the site involved.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
    #[error("{site}: HTTP error: {reason}")]
    Http { site: String, reason: String },
    #[error("{site}: no answer after {after:?}")]
    Timeout { site: String, after: Duration },
    #[error("{site}: bad HTTP status {status}")]
    Status { site: String, status: u16 },
    #[error("{site}: can not decode data: {reason}")]
    Decode { site: String, reason: String },
}

impl FetchError {
    /// Which site failed
    ///
    pub fn site(&self) -> &str {
        match self {
            FetchError::Http { site, .. }
            | FetchError::Timeout { site, .. }
            | FetchError::Status { site, .. }
            | FetchError::Decode { site, .. } => site,
        }
    }
}

/// Custom error type for the access module, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("No such site {0}")]
    UnknownSite(String),
    #[error("Site {0} has format {1}, expected {2}")]
    WrongFormat(String, String, String),
    #[error("Site {0} has no route {1}")]
    NoRoute(String, String),
    #[error("Site {0}: missing parameter {1} in route")]
    MissingParam(String, String),
    #[error("Can not create HTTP client: {0}")]
    Client(String),
    #[error(transparent)]
    Config(#[from] quakemap_common::ConfigFileError),
}
