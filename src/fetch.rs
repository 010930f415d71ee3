//! HTTP access to the upstream sources.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::{IngestError, Result};

/// Retrieves a page body by URL.
///
/// The pipeline only talks to the network through this trait so that tests
/// can substitute canned pages and failures.
pub trait Fetcher: Send {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking `reqwest` fetcher with a bounded per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(config::DEFAULT_TIMEOUT, config::USER_AGENT)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "Fetching");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text()?)
    }
}
