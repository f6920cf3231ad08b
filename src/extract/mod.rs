//! Field extractors over a parsed recipe page.
//!
//! Each extractor is read-only over the tree and scoped to the node it is
//! given. None of them fail: a missing sub-structure comes back as
//! [`Extraction::Absent`] and the record builder decides whether that is fatal.

use scraper::ElementRef;

use crate::error::ScrapeError;

mod directions;
mod ingredients;
mod thumbnail;
mod timing;
mod title;

pub use directions::extract_directions;
pub use ingredients::extract_ingredients;
pub use thumbnail::extract_thumbnail;
pub use timing::extract_timing;
pub use title::extract_title;

/// Outcome of a single extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Found(T),
    Absent,
}

impl<T> Extraction<T> {
    pub fn optional(self) -> Option<T> {
        match self {
            Extraction::Found(value) => Some(value),
            Extraction::Absent => None,
        }
    }

    /// Treat absence as a fatal missing structure
    pub fn required(self, what: &'static str) -> Result<T, ScrapeError> {
        self.optional().ok_or(ScrapeError::MissingStructure(what))
    }
}

impl<T: Default> Extraction<T> {
    pub fn or_empty(self) -> T {
        self.optional().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Extraction<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Extraction::Found(value),
            None => Extraction::Absent,
        }
    }
}

/// All descendant text of a node, concatenated without separators
pub(crate) fn node_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_node_text_has_no_separators() {
        let document = Html::parse_fragment("<p>Mix <b>flour</b> and <i>water</i>.</p>");
        let selector = Selector::parse("p").unwrap();
        let p = document.select(&selector).next().unwrap();
        assert_eq!(node_text(p), "Mix flour and water.");
    }

    #[test]
    fn test_required_maps_absent_to_missing_structure() {
        let absent: Extraction<String> = Extraction::Absent;
        match absent.required("title") {
            Err(ScrapeError::MissingStructure(what)) => assert_eq!(what, "title"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(Extraction::Found(3).required("x").unwrap(), 3);
        assert_eq!(Extraction::<Vec<String>>::Absent.or_empty(), Vec::<String>::new());
    }
}
