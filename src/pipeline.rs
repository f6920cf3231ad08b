use log::debug;

use crate::builder::RecordBuilder;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetch::{Fetcher, RequestFetcher};
use crate::model::RecipeRecord;

/// Fetches a recipe page and builds its record.
///
/// This pipeline:
/// 1. Fetches the page markup with the configured [`Fetcher`]
/// 2. Parses it into a document tree
/// 3. Runs the field extractors through [`RecordBuilder`]
///
/// Each call is independent; nothing is cached between pages.
pub struct Scraper<F = RequestFetcher> {
    fetcher: F,
    builder: RecordBuilder,
}

impl Scraper<RequestFetcher> {
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::with_fetcher(RequestFetcher::from_config(config)?)
    }
}

impl<F: Fetcher> Scraper<F> {
    pub fn with_fetcher(fetcher: F) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher,
            builder: RecordBuilder::new()?,
        })
    }

    pub fn scrape_page(&self, url: &str) -> Result<RecipeRecord, ScrapeError> {
        let markup = self.fetcher.fetch(url)?;
        debug!("Fetched {} bytes from {}", markup.len(), url);
        self.builder.build_from_markup(&markup)
    }
}
