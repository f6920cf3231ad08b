use log::debug;
use scraper::ElementRef;

use super::{node_text, Extraction};
use crate::selectors::Selectors;

/// Trimmed ingredient lines in document order. Items with no text at all
/// are skipped; whitespace-only items become empty strings.
pub fn extract_ingredients(
    selectors: &Selectors,
    content: ElementRef<'_>,
) -> Extraction<Vec<String>> {
    let ingredients: Vec<String> = content
        .select(&selectors.ingredients)
        .map(node_text)
        .filter(|text| !text.is_empty())
        .map(|text| text.trim().to_string())
        .collect();

    debug!("Found {} ingredients", ingredients.len());
    Extraction::Found(ingredients)
}
