pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod handler;
pub mod model;
pub mod pipeline;
pub mod selectors;
pub mod validate;

pub use builder::RecordBuilder;
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use fetch::{Fetcher, RequestFetcher};
pub use handler::{handle, Request, Response, ResponseData};
pub use model::{FieldValue, RecipeRecord, TimingDetails};
pub use pipeline::Scraper;
pub use validate::{is_valid_recipe, ValidationFailure};

/// Fetch `url` and build its recipe record with default settings
pub fn scrape_recipe(url: &str) -> Result<RecipeRecord, ScrapeError> {
    Scraper::from_config(&ScraperConfig::default())?.scrape_page(url)
}
