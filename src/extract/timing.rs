use log::{debug, warn};
use scraper::ElementRef;

use super::{node_text, Extraction};
use crate::model::TimingDetails;
use crate::selectors::Selectors;

/// Turn a details label like `"Prep Time:"` into a record key (`"prep time"`)
fn label_key(label: &str) -> String {
    let mut key = label.to_lowercase();
    key.pop();
    key
}

/// Collect the label/value pairs of the details block inside `content`.
///
/// Labels and values are paired by position up to the shorter sequence.
/// Values are kept verbatim. A missing details block yields an empty mapping.
pub fn extract_timing(selectors: &Selectors, content: ElementRef<'_>) -> Extraction<TimingDetails> {
    let Some(details) = content.select(&selectors.details).next() else {
        debug!("No recipe details block in content region");
        return Extraction::Found(TimingDetails::new());
    };

    let labels: Vec<ElementRef> = details.select(&selectors.details_label).collect();
    let values: Vec<ElementRef> = details.select(&selectors.details_value).collect();
    if labels.len() != values.len() {
        warn!(
            "Details block has {} labels but {} values, pairing the first {}",
            labels.len(),
            values.len(),
            labels.len().min(values.len())
        );
    }

    let mut timing = TimingDetails::new();
    for (label, value) in labels.into_iter().zip(values) {
        timing.insert(label_key(&node_text(label)), node_text(value));
    }

    debug!("Found {} details entries", timing.len());
    Extraction::Found(timing)
}
