//! Spanish rendering of evolution conditions
//!
//! Secondary conditions (friendship, time of day, known move, ...) are
//! collected first. An item-use or trade trigger then returns its own text
//! and drops them; a level-up trigger puts `Nivel N` / `Subir nivel` in front
//! of them.

use std::collections::HashMap;

use super::detail::{EvolutionDetail, EvolutionTrigger, TimeOfDay};
use super::tree::EvolutionEdge;

/// Render `details`, resolving item names through `items` (api name → localized)
///
/// Items missing from `items` are shown by their api name.
pub fn describe(details: Option<&EvolutionDetail>, items: &HashMap<String, String>) -> String {
    let Some(d) = details else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();

    if let Some(happiness) = d.min_happiness {
        parts.push(format!("Amistad {happiness}+"));
    }
    if let Some(affection) = d.min_affection {
        parts.push(format!("{affection} corazones de afecto+"));
    }
    if let Some(beauty) = d.min_beauty {
        parts.push(format!("Belleza {beauty}+"));
    }

    match d.time_of_day {
        Some(TimeOfDay::Day) => parts.push("(día)".to_string()),
        Some(TimeOfDay::Night) => parts.push("(noche)".to_string()),
        _ => {}
    }

    if let Some(known_move) = &d.known_move {
        parts.push(format!("Conocer {known_move}"));
    }
    if let Some(move_type) = &d.known_move_type {
        parts.push(format!("Conocer movimiento tipo {move_type}"));
    }

    if let Some(location) = &d.location {
        parts.push(format!("En {location}"));
    }

    match (&d.trigger, &d.item) {
        (Some(EvolutionTrigger::UseItem), Some(item)) => {
            format!("Usar {}", localized(items, item))
        }
        (Some(EvolutionTrigger::Trade), _) => match &d.held_item {
            Some(held) => format!("Intercambio (con {})", localized(items, held)),
            None => "Intercambio".to_string(),
        },
        (Some(EvolutionTrigger::LevelUp), _) => {
            let lead = match d.min_level {
                Some(level) => format!("Nivel {level}"),
                None => "Subir nivel".to_string(),
            };
            parts.insert(0, lead);
            parts.join(" ")
        }
        (trigger, _) => {
            if !parts.is_empty() {
                parts.join(" ")
            } else if let Some(trigger) = trigger {
                format!("Trigger: {}", trigger.api_name())
            } else {
                String::new()
            }
        }
    }
}

fn localized<'a>(items: &'a HashMap<String, String>, name: &'a str) -> &'a str {
    items.get(name).map(String::as_str).unwrap_or(name)
}

impl EvolutionEdge {
    pub fn describe(&self, items: &HashMap<String, String>) -> String {
        describe(self.details.as_ref(), items)
    }
}
