use serde::{Deserialize, Serialize};

/// One entry of the dataset resource.
///
/// `name` is the lookup key and is always compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(rename = "url", default)]
    pub image_url: String,
    pub count: i64,
    #[serde(default)]
    pub label: String,
}

impl CountryRecord {
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive name comparison, using the same folding as [`name_key`].
pub fn names_match(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}

/// Normalized key used to group shapes by country.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}
