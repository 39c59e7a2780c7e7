//! National dex listing and search suggestions

use pokedex_catalog::ResourceList;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Default number of suggestions returned by [`suggest`]
pub const SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DexEntry {
    pub id: u32,
    pub name: String,
}

/// Entries of a `pokemon?limit=` listing; results without an id in their url
/// are skipped
pub fn dex_entries(list: &ResourceList) -> Vec<DexEntry> {
    list.results
        .iter()
        .filter(|r| !r.name.is_empty())
        .filter_map(|r| {
            Some(DexEntry {
                id: r.id()?,
                name: r.name.clone(),
            })
        })
        .collect()
}

/// Lowercase, trim and strip diacritics (`"  Flabébé "` → `"flabebe"`)
pub fn normalize_term(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Entries matching `term`, at most `limit`, in list order
///
/// An all-digit term matches ids starting with those digits; anything else
/// matches names containing the normalized term.
pub fn suggest<'a>(entries: &'a [DexEntry], term: &str, limit: usize) -> Vec<&'a DexEntry> {
    let term = normalize_term(term);
    if term.is_empty() {
        return Vec::new();
    }

    let numeric = term.chars().all(|c| c.is_ascii_digit());
    entries
        .iter()
        .filter(|entry| {
            if numeric {
                entry.id.to_string().starts_with(&term)
            } else {
                normalize_term(&entry.name).contains(&term)
            }
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_catalog::decode;
    use serde_json::json;

    fn entries() -> Vec<DexEntry> {
        [(1, "bulbasaur"), (12, "butterfree"), (25, "pikachu"), (125, "electabuzz"), (669, "flabébé")]
            .into_iter()
            .map(|(id, name)| DexEntry { id, name: name.to_string() })
            .collect()
    }

    #[test]
    fn test_dex_entries_from_listing() {
        let list: ResourceList = decode(&json!({
            "count": 3,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "broken", "url": "https://pokeapi.co/api/v2/pokemon/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }))
        .unwrap();

        assert_eq!(
            dex_entries(&list),
            vec![
                DexEntry { id: 1, name: "bulbasaur".to_string() },
                DexEntry { id: 2, name: "ivysaur".to_string() },
            ]
        );
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  Flabébé "), "flabebe");
        assert_eq!(normalize_term("NIDORAN♀"), "nidoran♀");
    }

    #[test]
    fn test_suggest_by_id_prefix() {
        let entries = entries();
        let ids: Vec<u32> = suggest(&entries, "12", SUGGESTION_LIMIT).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![12, 125]);
    }

    #[test]
    fn test_suggest_by_name() {
        let entries = entries();
        let names: Vec<&str> = suggest(&entries, "BU", SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["bulbasaur", "butterfree", "electabuzz"]);
        assert_eq!(suggest(&entries, "flabe", SUGGESTION_LIMIT).len(), 1);
    }

    #[test]
    fn test_suggest_limit_and_empty() {
        let entries = entries();
        assert_eq!(suggest(&entries, "u", 2).len(), 2);
        assert!(suggest(&entries, "   ", SUGGESTION_LIMIT).is_empty());
        assert!(suggest(&entries, "mew", SUGGESTION_LIMIT).is_empty());
    }
}
