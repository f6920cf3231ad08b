use log::debug;
use scraper::ElementRef;

use super::Extraction;
use crate::selectors::{Selectors, IMAGE_SOURCE_ATTR, IMAGE_WIDTH_ATTR, MIN_THUMBNAIL_WIDTH};

/// Declared width must be a whole integer above the threshold. Values too
/// large for `i64` still count.
fn is_wide_enough(width: Option<&str>) -> bool {
    let Some(width) = width.map(str::trim) else {
        return false;
    };
    let digits = match width.as_bytes().first() {
        // negative widths never clear the threshold
        Some(b'-') => return false,
        Some(b'+') => &width[1..],
        _ => width,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match digits.parse::<i64>() {
        Ok(w) => w > MIN_THUMBNAIL_WIDTH,
        Err(_) => true,
    }
}

/// First image URL, in document order, inside an image placeholder whose
/// declared width is an integer above the thumbnail threshold.
pub fn extract_thumbnail(selectors: &Selectors, content: ElementRef<'_>) -> Extraction<String> {
    for placeholder in content.select(&selectors.image_placeholder) {
        for image in placeholder.select(&selectors.image) {
            let element = image.value();
            let src = element.attr(IMAGE_SOURCE_ATTR).unwrap_or_default();
            if !src.is_empty() && is_wide_enough(element.attr(IMAGE_WIDTH_ATTR)) {
                debug!("Found thumbnail: {}", src);
                return Extraction::Found(src.to_string());
            }
        }
    }

    debug!("No image wider than {}px found", MIN_THUMBNAIL_WIDTH);
    Extraction::Absent
}
