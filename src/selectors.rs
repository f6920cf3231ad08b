//! Tag and class signatures for the allrecipes.com article layout.
//!
//! Every extractor looks nodes up through this table, so a layout change
//! only has to be made here.

use scraper::Selector;

use crate::error::ScrapeError;

/// A `(tag, class)` pair identifying a node. A class containing spaces
/// requires every listed class to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl Signature {
    const fn new(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    /// CSS form of the signature, e.g. `p.comp.mntl-sc-block`
    pub fn css(&self) -> String {
        match self.class {
            Some(class) => {
                let classes: Vec<&str> = class.split_whitespace().collect();
                format!("{}.{}", self.tag, classes.join("."))
            }
            None => self.tag.to_string(),
        }
    }

    pub fn compile(&self) -> Result<Selector, ScrapeError> {
        let css = self.css();
        Selector::parse(&css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
    }
}

pub const CONTENT: Signature = Signature::new("div", "article-content");
pub const TITLE: Signature = Signature::new("h1", "article-heading");
pub const DETAILS: Signature = Signature::new("div", "mm-recipes-details");
pub const DETAILS_LABEL: Signature = Signature::new("div", "mm-recipes-details__label");
pub const DETAILS_VALUE: Signature = Signature::new("div", "mm-recipes-details__value");
pub const IMAGE_PLACEHOLDER: Signature = Signature::new("div", "img-placeholder");
pub const IMAGE: Signature = Signature::tag("img");
pub const DIRECTIONS: Signature = Signature::new("p", "comp mntl-sc-block mntl-sc-block-html");
pub const INGREDIENTS: Signature =
    Signature::new("li", "mm-recipes-structured-ingredients__list-item");

/// Attribute holding the lazily loaded image URL
pub const IMAGE_SOURCE_ATTR: &str = "data-src";
/// Attribute holding the declared image width
pub const IMAGE_WIDTH_ATTR: &str = "width";
/// Images must be strictly wider than this to count as a thumbnail
pub const MIN_THUMBNAIL_WIDTH: i64 = 200;

/// Compiled form of the signature table
#[derive(Debug, Clone)]
pub struct Selectors {
    pub content: Selector,
    pub title: Selector,
    pub details: Selector,
    pub details_label: Selector,
    pub details_value: Selector,
    pub image_placeholder: Selector,
    pub image: Selector,
    pub directions: Selector,
    pub ingredients: Selector,
}

impl Selectors {
    pub fn compile() -> Result<Self, ScrapeError> {
        Ok(Self {
            content: CONTENT.compile()?,
            title: TITLE.compile()?,
            details: DETAILS.compile()?,
            details_label: DETAILS_LABEL.compile()?,
            details_value: DETAILS_VALUE.compile()?,
            image_placeholder: IMAGE_PLACEHOLDER.compile()?,
            image: IMAGE.compile()?,
            directions: DIRECTIONS.compile()?,
            ingredients: INGREDIENTS.compile()?,
        })
    }
}
