use log::debug;
use scraper::Html;

use super::{node_text, Extraction};
use crate::selectors::Selectors;

/// Text of the article heading. Searches the whole document because the
/// heading sits outside the content region.
pub fn extract_title(selectors: &Selectors, document: &Html) -> Extraction<String> {
    let title = document.select(&selectors.title).next().map(node_text);
    if let Some(title) = &title {
        debug!("Recipe title: {}", title.trim());
    }
    title.into()
}
