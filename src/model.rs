use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Record keys that are not derived from the page's timing labels
pub const FIXED_KEYS: [&str; 4] = ["title", "thumbnail", "ingredients", "directions"];

/// Label/value pairs taken from the recipe details block, in page order.
///
/// Keys are whatever labels the page renders, so this is a mapping rather
/// than a fixed shape. Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingDetails {
    entries: Vec<(String, String)>,
}

impl TimingDetails {
    /// Timing keys the validator looks for
    pub const KNOWN_KEYS: [&'static str; 3] = ["prep time", "cook time", "total time"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TimingDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Structured recipe scraped from one page.
///
/// `None` means the field was not found on the page, which is distinct from
/// an empty string or list. Serializes as a flat JSON object with timing
/// keys between `thumbnail` and `ingredients`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub timing: TimingDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
}

/// Borrowed view of one record value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl RecipeRecord {
    /// Look a field up by its record key, timing keys included
    pub fn get(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "title" => self.title.as_deref().map(FieldValue::Text),
            "thumbnail" => self.thumbnail.as_deref().map(FieldValue::Text),
            "ingredients" => self.ingredients.as_deref().map(FieldValue::List),
            "directions" => self.directions.as_deref().map(FieldValue::Text),
            _ => self.timing.get(key).map(FieldValue::Text),
        }
    }

    /// Record keys present, in serialization order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        if self.title.is_some() {
            keys.push("title");
        }
        if self.thumbnail.is_some() {
            keys.push("thumbnail");
        }
        keys.extend(self.timing.iter().map(|(k, _)| k));
        if self.ingredients.is_some() {
            keys.push("ingredients");
        }
        if self.directions.is_some() {
            keys.push("directions");
        }
        keys
    }
}
