//! Evolution chains
//!
//! A catalog chain is first decoded into [`EvolutionDetail`]s, then folded into
//! an owned [`EvolutionTree`] that callers walk and render.

mod describe;
mod detail;
mod tree;

pub use describe::describe;
pub use detail::{EvolutionDetail, EvolutionTrigger, TimeOfDay};
pub use tree::{EvolutionEdge, EvolutionNode, EvolutionTree};
