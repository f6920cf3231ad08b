use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// Retrieves the raw markup of a page
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Blocking HTTP fetcher. No retries; the caller owns any time budget
/// beyond the per-request timeout.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::new(config.timeout(), &config.user_agent)
    }
}

impl Fetcher for RequestFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}
