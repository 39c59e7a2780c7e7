//! Move index rows, ranked search and column sorting

use std::cmp::Ordering;

use pokedex_catalog::{Move, generation_roman, pick_effect, pick_name};

use crate::search::normalize_term;

/// One row of the move index
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSummary {
    pub id: u32,
    /// Catalog (English) name
    pub name: String,
    pub localized_name: String,
    /// Generation as a Roman numeral (`"IV"`)
    pub generation: String,
    /// Type api name, empty when unknown
    pub kind: String,
    /// `physical`, `special` or `status`
    pub class: String,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub description: String,
}

impl MoveSummary {
    pub fn from_move(m: &Move, lang: &str) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            localized_name: pick_name(&m.names, lang, &m.name).to_string(),
            generation: m
                .generation
                .as_ref()
                .map(|g| generation_roman(&g.name))
                .unwrap_or_default(),
            kind: m.kind.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
            class: m.damage_class.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
            power: m.power,
            accuracy: m.accuracy,
            pp: m.pp,
            description: pick_effect(&m.flavor_text_entries, lang),
        }
    }
}

/// Column of the move table to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveSortKey {
    Id,
    Name,
    LocalizedName,
    Generation,
    Kind,
    Class,
    Power,
    Accuracy,
    Pp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

enum SortValue {
    Number(Option<u32>),
    Text(String),
}

impl MoveSortKey {
    fn value(self, row: &MoveSummary) -> SortValue {
        match self {
            MoveSortKey::Id => SortValue::Number(Some(row.id)),
            MoveSortKey::Power => SortValue::Number(row.power),
            MoveSortKey::Accuracy => SortValue::Number(row.accuracy),
            MoveSortKey::Pp => SortValue::Number(row.pp),
            MoveSortKey::Name => SortValue::Text(normalize_term(&row.name)),
            MoveSortKey::LocalizedName => SortValue::Text(normalize_term(&row.localized_name)),
            MoveSortKey::Generation => SortValue::Text(normalize_term(&row.generation)),
            MoveSortKey::Kind => SortValue::Text(normalize_term(&row.kind)),
            MoveSortKey::Class => SortValue::Text(normalize_term(&row.class)),
        }
    }
}

/// Sort rows by one column
///
/// Text compares ignoring case and accents. Rows missing the value go last
/// in either direction, ordered by id among themselves. Equal values keep
/// their input order.
pub fn sort_moves(rows: &mut [MoveSummary], key: MoveSortKey, direction: SortDirection) {
    rows.sort_by(|a, b| compare_moves(a, b, key, direction));
}

fn compare_moves(
    a: &MoveSummary,
    b: &MoveSummary,
    key: MoveSortKey,
    direction: SortDirection,
) -> Ordering {
    let ordering = match (key.value(a), key.value(b)) {
        (SortValue::Number(None), SortValue::Number(None)) => return a.id.cmp(&b.id),
        (SortValue::Number(None), _) => return Ordering::Greater,
        (_, SortValue::Number(None)) => return Ordering::Less,
        (SortValue::Number(Some(x)), SortValue::Number(Some(y))) => x.cmp(&y),
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Rows matching `term`, best match first, at most `limit`
///
/// Scores add up across the id, the localized name and the catalog name.
/// Ties go to the lower id.
pub fn suggest_moves<'a>(rows: &'a [MoveSummary], term: &str, limit: usize) -> Vec<&'a MoveSummary> {
    let term = normalize_term(term);
    if term.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &MoveSummary)> = rows
        .iter()
        .map(|row| (match_score(row, &term), row))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|(sa, a), (sb, b)| sb.cmp(sa).then(a.id.cmp(&b.id)));
    scored.into_iter().take(limit).map(|(_, row)| row).collect()
}

fn match_score(row: &MoveSummary, term: &str) -> u32 {
    let id = row.id.to_string();
    let id_score = if id == term {
        1000
    } else if id.starts_with(term) {
        200
    } else {
        0
    };
    id_score
        + text_score(&normalize_term(&row.localized_name), term, [900, 350, 140])
        + text_score(&normalize_term(&row.name), term, [650, 220, 80])
}

/// `[exact, prefix, contains]`
fn text_score(text: &str, term: &str, weights: [u32; 3]) -> u32 {
    if text == term {
        weights[0]
    } else if text.starts_with(term) {
        weights[1]
    } else if text.contains(term) {
        weights[2]
    } else {
        0
    }
}
