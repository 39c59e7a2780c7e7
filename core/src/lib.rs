//! Type matchups, evolution trees and dex search over PokeAPI data.
//!
//! # Overview
//!
//! `pokedex-core` sits between `pokedex-catalog` (wire format) and the client:
//!
//! ```text
//! pokedex-catalog (wire format)
//!        │
//!        ▼
//! pokedex-core (domain types + computation) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-client (fetching, caching, fan-out)
//! ```
//!
//! Everything here is synchronous and total: malformed or missing catalog
//! data degrades to neutral multipliers or an empty tree, never an error.
//!
//! # Main Types
//!
//! - [`Type`], [`TypeRelation`], [`Multiplier`] - elemental types and their relations
//! - [`Matchups`] - one multiplier per type, bucketed by value
//! - [`TypeChart`] - full attacker × defender grid
//! - [`EvolutionTree`] - normalized evolution chain with [`describe`]d edges
//! - [`DexEntry`], [`MoveSummary`] - listing rows
//!
//! # Example Usage
//!
//! ```
//! use pokedex_core::{Multiplier, Type, TypeRelation, defensive_matchups};
//!
//! let own = [TypeRelation::builtin(Type::Ghost), TypeRelation::builtin(Type::Normal)];
//! let defense = defensive_matchups(&own);
//!
//! assert_eq!(defense.get(Type::Normal), Multiplier::Immune);
//! for (multiplier, types) in defense.buckets() {
//!     println!("{}: {:?}", multiplier.label(), types);
//! }
//! ```

pub mod evolution;
pub mod moves;
pub mod query;
pub mod search;
pub mod types;

pub use evolution::{
    EvolutionDetail, EvolutionEdge, EvolutionNode, EvolutionTree, EvolutionTrigger, TimeOfDay,
    describe,
};
pub use moves::{MoveSortKey, MoveSummary, SortDirection, sort_moves, suggest_moves};
pub use query::{
    MAX_OWN_TYPES, Matchups, TypeChart, defensive_matchups, defensive_multiplier, immunities,
    offensive_matchups, offensive_multiplier, weaknesses,
};
pub use search::{DexEntry, SUGGESTION_LIMIT, dex_entries, normalize_term, suggest};
pub use types::{Multiplier, TYPE_CHART, Type, TypeRelation, TypeSet};
