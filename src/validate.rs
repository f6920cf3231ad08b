use thiserror::Error;

use crate::model::{RecipeRecord, TimingDetails};

/// First completeness check a record failed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("No thumbnail")]
    Thumbnail,
    #[error("No title")]
    Title,
    #[error("No ingredients")]
    Ingredients,
    #[error("No directions")]
    Directions,
    #[error("No prep, cook or total time")]
    Timing,
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Check that a record carries everything a usable recipe needs.
///
/// Thumbnail, title, ingredients and directions must be present and
/// non-empty, and at least one known timing key must have a value.
pub fn check(record: &RecipeRecord) -> Result<(), ValidationFailure> {
    if !filled(record.thumbnail.as_deref()) {
        return Err(ValidationFailure::Thumbnail);
    }
    if !filled(record.title.as_deref()) {
        return Err(ValidationFailure::Title);
    }
    if record.ingredients.as_ref().map_or(true, Vec::is_empty) {
        return Err(ValidationFailure::Ingredients);
    }
    if !filled(record.directions.as_deref()) {
        return Err(ValidationFailure::Directions);
    }

    let has_time = TimingDetails::KNOWN_KEYS
        .iter()
        .any(|key| filled(record.timing.get(key)));
    if !has_time {
        return Err(ValidationFailure::Timing);
    }

    Ok(())
}

pub fn is_valid_recipe(record: &RecipeRecord) -> bool {
    check(record).is_ok()
}
