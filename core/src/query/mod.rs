//! Type matchup queries
//!
//! Offensive coverage and defensive multipliers for a creature's own types,
//! plus the full attacker × defender chart.

mod chart;
mod matchup;

pub use chart::TypeChart;
pub use matchup::{
    MAX_OWN_TYPES,
    Matchups,
    defensive_matchups,
    defensive_multiplier,
    immunities,
    offensive_matchups,
    offensive_multiplier,
    weaknesses,
};
