//! Localized names and flavor text

use serde::Deserialize;

use crate::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

/// A flavor or effect text entry in one language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlavorText {
    #[serde(alias = "text", alias = "effect")]
    pub flavor_text: String,
    pub language: NamedResource,
}

/// First name in `lang`, or `fallback` when the catalog has none
pub fn pick_name<'a>(names: &'a [LocalizedName], lang: &str, fallback: &'a str) -> &'a str {
    names
        .iter()
        .find(|n| n.language.name == lang)
        .map(|n| n.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(fallback)
}

/// First flavor text in `lang`, whitespace collapsed
///
/// Older game text spells the franchise name `POKéMON`; the first occurrence
/// is rewritten to `Pokémon`. Missing text yields an empty string.
pub fn pick_flavor(entries: &[FlavorText], lang: &str) -> String {
    match entries.iter().find(|f| f.language.name == lang) {
        Some(entry) if !entry.flavor_text.is_empty() => {
            collapse_whitespace(&entry.flavor_text).replacen("POKéMON", "Pokémon", 1)
        }
        _ => String::new(),
    }
}

/// First effect text in `lang`, whitespace collapsed and trimmed
pub fn pick_effect(entries: &[FlavorText], lang: &str) -> String {
    entries
        .iter()
        .find(|f| f.language.name == lang)
        .map(|f| collapse_whitespace(&f.flavor_text).trim().to_string())
        .unwrap_or_default()
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
