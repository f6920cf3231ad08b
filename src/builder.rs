use log::{debug, warn};
use scraper::Html;

use crate::error::ScrapeError;
use crate::extract::{
    extract_directions, extract_ingredients, extract_thumbnail, extract_timing, extract_title,
};
use crate::model::{RecipeRecord, FIXED_KEYS};
use crate::selectors::Selectors;

/// Assembles a [`RecipeRecord`] from one parsed recipe page.
///
/// The content region and the article heading are required; every other
/// field degrades to absent or empty when its markup is missing.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    selectors: Selectors,
}

impl RecordBuilder {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            selectors: Selectors::compile()?,
        })
    }

    /// Parse raw page markup and build a record from it
    pub fn build_from_markup(&self, markup: &str) -> Result<RecipeRecord, ScrapeError> {
        let document = Html::parse_document(markup);
        self.build(&document)
    }

    pub fn build(&self, document: &Html) -> Result<RecipeRecord, ScrapeError> {
        let selectors = &self.selectors;

        let title = extract_title(selectors, document).required("article heading")?;
        let content = document
            .select(&selectors.content)
            .next()
            .ok_or(ScrapeError::MissingStructure("article content"))?;

        let thumbnail = extract_thumbnail(selectors, content).optional();

        let mut timing = extract_timing(selectors, content).or_empty();
        for key in FIXED_KEYS {
            if let Some(value) = timing.remove(key) {
                warn!("Dropping details entry {:?} = {:?}, key is reserved", key, value);
            }
        }

        let ingredients = extract_ingredients(selectors, content).or_empty();
        let directions = extract_directions(selectors, content).or_empty();

        let record = RecipeRecord {
            title: Some(title),
            thumbnail,
            timing,
            ingredients: Some(ingredients),
            directions: Some(directions),
        };
        debug!("Built record with keys {:?}", record.keys());
        Ok(record)
    }
}
