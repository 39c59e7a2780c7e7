//! Resource references shared by every catalog document

use serde::Deserialize;

use crate::CatalogError;

/// A `{ name, url }` pointer to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id encoded at the end of the url
    pub fn id(&self) -> Option<u32> {
        resource_id(&self.url).ok()
    }
}

/// A bare `{ url }` pointer (used by species → evolution chain)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

/// Extract the trailing numeric id from a resource url
///
/// `https://pokeapi.co/api/v2/pokemon/25/` → `25`
pub fn resource_id(url: &str) -> Result<u32, CatalogError> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| CatalogError::InvalidResourceUrl(url.to_string()))
}

/// Render a generation resource name as a Roman numeral (`generation-iv` → `IV`)
pub fn generation_roman(name: &str) -> String {
    let key = name.strip_prefix("generation-").unwrap_or(name);
    match key {
        "i" => "I",
        "ii" => "II",
        "iii" => "III",
        "iv" => "IV",
        "v" => "V",
        "vi" => "VI",
        "vii" => "VII",
        "viii" => "VIII",
        "ix" => "IX",
        other => return other.to_uppercase(),
    }
    .to_string()
}
