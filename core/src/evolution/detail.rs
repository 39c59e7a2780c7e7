//! Validated evolution conditions

use pokedex_catalog::{NamedResource, RawEvolutionDetail};

/// What starts an evolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EvolutionTrigger {
    LevelUp,
    Trade,
    UseItem,
    /// Any other catalog trigger (`shed`, `spin`, `three-critical-hits`, ...)
    Other(String),
}

impl EvolutionTrigger {
    pub fn from_api_name(s: &str) -> Self {
        match s {
            "level-up" => EvolutionTrigger::LevelUp,
            "trade" => EvolutionTrigger::Trade,
            "use-item" => EvolutionTrigger::UseItem,
            other => EvolutionTrigger::Other(other.to_string()),
        }
    }

    pub fn api_name(&self) -> &str {
        match self {
            EvolutionTrigger::LevelUp => "level-up",
            EvolutionTrigger::Trade => "trade",
            EvolutionTrigger::UseItem => "use-item",
            EvolutionTrigger::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Day,
    Night,
    Other(String),
}

impl TimeOfDay {
    /// Empty strings mean "any time" and yield `None`
    pub fn from_api_name(s: &str) -> Option<Self> {
        match s {
            "" => None,
            "day" => Some(TimeOfDay::Day),
            "night" => Some(TimeOfDay::Night),
            other => Some(TimeOfDay::Other(other.to_string())),
        }
    }
}

/// Conditions attached to one evolution edge
///
/// Absent conditions are `None`; the catalog's `0` and `""` placeholders are
/// normalized away during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionDetail {
    pub trigger: Option<EvolutionTrigger>,
    /// Item used on the pokemon
    pub item: Option<String>,
    /// Item held while the trigger fires
    pub held_item: Option<String>,
    pub known_move: Option<String>,
    pub known_move_type: Option<String>,
    pub location: Option<String>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub min_beauty: Option<u32>,
    pub time_of_day: Option<TimeOfDay>,
}

impl EvolutionDetail {
    /// Item relevant to the edge, used item first
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_deref().or(self.held_item.as_deref())
    }
}

impl From<&RawEvolutionDetail> for EvolutionDetail {
    fn from(raw: &RawEvolutionDetail) -> Self {
        Self {
            trigger: name(&raw.trigger).map(EvolutionTrigger::from_api_name),
            item: name(&raw.item).map(str::to_string),
            held_item: name(&raw.held_item).map(str::to_string),
            known_move: name(&raw.known_move).map(str::to_string),
            known_move_type: name(&raw.known_move_type).map(str::to_string),
            location: name(&raw.location).map(str::to_string),
            min_level: positive(raw.min_level),
            min_happiness: positive(raw.min_happiness),
            min_affection: positive(raw.min_affection),
            min_beauty: positive(raw.min_beauty),
            time_of_day: raw.time_of_day.as_deref().and_then(TimeOfDay::from_api_name),
        }
    }
}

fn name(resource: &Option<NamedResource>) -> Option<&str> {
    resource
        .as_ref()
        .map(|r| r.name.as_str())
        .filter(|n| !n.is_empty())
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}
