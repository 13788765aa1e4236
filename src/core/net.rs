// src/core/net.rs
// Blocking HTTP GET; one client per crawl.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Http { url: s!("<client>"), source })?;
        Ok(Self { client })
    }

    /// Fetch `url` and return the body. Anything other than 2xx is an error.
    pub fn get(&self, url: &str) -> Result<String> {
        let http = |source| Error::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status });
        }
        resp.text().map_err(http)
    }
}
