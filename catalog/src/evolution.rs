//! `evolution-chain` documents
//!
//! The chain is a recursive record: each link names a species and lists the
//! links it evolves into. Each child link carries the conditions under which
//! its parent turns into it.

use serde::Deserialize;

use crate::NamedResource;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: Option<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,

    /// Conditions for reaching this link from its parent (empty on the root)
    #[serde(default)]
    pub evolution_details: Vec<RawEvolutionDetail>,
}

/// One `evolution_details` entry, as sent by the catalog
///
/// The catalog sends every key on every entry, using `null`, `""` or `0` for
/// conditions that do not apply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEvolutionDetail {
    #[serde(default)]
    pub trigger: Option<NamedResource>,

    #[serde(default)]
    pub item: Option<NamedResource>,

    #[serde(default)]
    pub held_item: Option<NamedResource>,

    #[serde(default)]
    pub known_move: Option<NamedResource>,

    #[serde(default)]
    pub known_move_type: Option<NamedResource>,

    #[serde(default)]
    pub location: Option<NamedResource>,

    #[serde(default)]
    pub min_level: Option<u32>,

    #[serde(default)]
    pub min_happiness: Option<u32>,

    #[serde(default)]
    pub min_affection: Option<u32>,

    #[serde(default)]
    pub min_beauty: Option<u32>,

    #[serde(default)]
    pub time_of_day: Option<String>,
}
