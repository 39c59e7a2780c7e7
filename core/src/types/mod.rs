//! Elemental type domain types

mod multiplier;
mod pokemon_type;
mod relation;

pub use multiplier::Multiplier;
pub use pokemon_type::{TYPE_CHART, Type};
pub use relation::{TypeRelation, TypeSet};
