use log::debug;
use scraper::ElementRef;

use super::{node_text, Extraction};
use crate::selectors::Selectors;

/// Trimmed text of every instruction paragraph, concatenated with no separator.
pub fn extract_directions(selectors: &Selectors, content: ElementRef<'_>) -> Extraction<String> {
    let mut steps = 0;
    let mut directions = String::new();
    for paragraph in content.select(&selectors.directions) {
        let text = node_text(paragraph);
        if !text.is_empty() {
            directions.push_str(text.trim());
            steps += 1;
        }
    }

    debug!("Found {} direction paragraphs", steps);
    Extraction::Found(directions)
}
