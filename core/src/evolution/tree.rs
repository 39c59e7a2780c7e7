//! Evolution tree construction and traversal

use std::collections::BTreeSet;

use pokedex_catalog::{ChainLink, EvolutionChain};

use super::detail::EvolutionDetail;

/// A species in the tree and the evolutions leaving it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species: String,
    pub edges: Vec<EvolutionEdge>,
}

/// An evolution into `target`, under `details` when the catalog lists any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionEdge {
    pub target: EvolutionNode,
    pub details: Option<EvolutionDetail>,
}

impl EvolutionNode {
    /// Build a node and everything below it from a catalog link
    ///
    /// Only the first `evolution_details` entry of each child is kept.
    pub fn from_link(link: &ChainLink) -> Self {
        Self {
            species: link.species.name.clone(),
            edges: link
                .evolves_to
                .iter()
                .map(|child| EvolutionEdge {
                    details: child.evolution_details.first().map(EvolutionDetail::from),
                    target: EvolutionNode::from_link(child),
                })
                .collect(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A normalized evolution chain; empty when the catalog had no chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionTree {
    pub root: Option<EvolutionNode>,
}

impl EvolutionTree {
    pub fn new(root: EvolutionNode) -> Self {
        Self { root: Some(root) }
    }

    pub fn from_link(link: Option<&ChainLink>) -> Self {
        Self {
            root: link.map(EvolutionNode::from_link),
        }
    }

    pub fn from_chain(chain: &EvolutionChain) -> Self {
        Self::from_link(chain.chain.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True when the base species evolves in more than one direction
    pub fn is_branched(&self) -> bool {
        self.root.as_ref().is_some_and(|r| r.edges.len() > 1)
    }

    /// Every species name in the tree
    pub fn species_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        if let Some(root) = &self.root {
            collect_species(root, &mut names);
        }
        names
    }

    /// Every item used or held by an evolution anywhere in the tree
    pub fn item_names(&self) -> BTreeSet<String> {
        let mut items = BTreeSet::new();
        if let Some(root) = &self.root {
            collect_items(root, &mut items);
        }
        items
    }

    /// All `(parent, edge)` pairs, depth-first with each edge's subtree
    /// following it
    pub fn links(&self) -> Vec<(&EvolutionNode, &EvolutionEdge)> {
        let mut links = Vec::new();
        if let Some(root) = &self.root {
            collect_links(root, &mut links);
        }
        links
    }

    pub fn find(&self, species: &str) -> Option<&EvolutionNode> {
        self.root.as_ref().and_then(|root| find_node(root, species))
    }
}

fn collect_species(node: &EvolutionNode, names: &mut BTreeSet<String>) {
    names.insert(node.species.clone());
    for edge in &node.edges {
        collect_species(&edge.target, names);
    }
}

fn collect_items(node: &EvolutionNode, items: &mut BTreeSet<String>) {
    for edge in &node.edges {
        if let Some(details) = &edge.details {
            if let Some(item) = &details.item {
                items.insert(item.clone());
            }
            if let Some(held) = &details.held_item {
                items.insert(held.clone());
            }
        }
        collect_items(&edge.target, items);
    }
}

fn collect_links<'a>(node: &'a EvolutionNode, links: &mut Vec<(&'a EvolutionNode, &'a EvolutionEdge)>) {
    for edge in &node.edges {
        links.push((node, edge));
        collect_links(&edge.target, links);
    }
}

fn find_node<'a>(node: &'a EvolutionNode, species: &str) -> Option<&'a EvolutionNode> {
    if node.species == species {
        return Some(node);
    }
    node.edges.iter().find_map(|edge| find_node(&edge.target, species))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_catalog::decode;
    use serde_json::{Value, json};

    fn link(species: &str, details: Value, children: Vec<Value>) -> Value {
        json!({
            "species": { "name": species, "url": "" },
            "evolution_details": details,
            "evolves_to": children,
        })
    }

    fn level_up(level: u32) -> Value {
        json!([{ "trigger": { "name": "level-up", "url": "" }, "min_level": level }])
    }

    fn use_item(item: &str) -> Value {
        json!([{ "trigger": { "name": "use-item", "url": "" }, "item": { "name": item, "url": "" } }])
    }

    fn tree(value: Value) -> EvolutionTree {
        let root: ChainLink = decode(&value).unwrap();
        EvolutionTree::from_link(Some(&root))
    }

    #[test]
    fn test_linear_chain() {
        let tree = tree(link(
            "charmander",
            json!([]),
            vec![link("charmeleon", level_up(16), vec![link("charizard", level_up(36), vec![])])],
        ));

        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.species, "charmander");
        assert_eq!(root.edges.len(), 1);
        assert_eq!(root.edges[0].details.as_ref().unwrap().min_level, Some(16));
        assert_eq!(root.edges[0].target.edges[0].target.species, "charizard");
        assert!(root.edges[0].target.edges[0].target.is_leaf());
        assert!(!tree.is_branched());

        let names: Vec<String> = tree.species_names().into_iter().collect();
        assert_eq!(names, vec!["charizard", "charmander", "charmeleon"]);
    }

    #[test]
    fn test_branched_chain() {
        let children: Vec<Value> = [
            ("vaporeon", use_item("water-stone")),
            ("jolteon", use_item("thunder-stone")),
            ("flareon", use_item("fire-stone")),
            ("espeon", json!([{ "trigger": { "name": "level-up", "url": "" }, "min_happiness": 160, "time_of_day": "day" }])),
            ("umbreon", json!([{ "trigger": { "name": "level-up", "url": "" }, "min_happiness": 160, "time_of_day": "night" }])),
            ("leafeon", use_item("leaf-stone")),
            ("glaceon", use_item("ice-stone")),
            ("sylveon", json!([{ "trigger": { "name": "level-up", "url": "" }, "min_affection": 2, "known_move_type": { "name": "fairy", "url": "" } }])),
        ]
        .into_iter()
        .map(|(name, details)| link(name, details, vec![]))
        .collect();

        let tree = tree(link("eevee", json!([]), children));
        let root = tree.root.as_ref().unwrap();

        assert_eq!(root.edges.len(), 8);
        assert!(root.edges.iter().all(|e| e.target.is_leaf()));
        assert!(tree.is_branched());
        assert_eq!(tree.species_names().len(), 9);
        assert_eq!(
            tree.item_names().into_iter().collect::<Vec<_>>(),
            vec!["fire-stone", "ice-stone", "leaf-stone", "thunder-stone", "water-stone"]
        );
    }

    #[test]
    fn test_only_first_detail_is_kept() {
        let tree = tree(link(
            "magneton",
            json!([]),
            vec![link(
                "magnezone",
                json!([
                    { "trigger": { "name": "level-up", "url": "" }, "location": { "name": "mt-coronet", "url": "" } },
                    { "trigger": { "name": "use-item", "url": "" }, "item": { "name": "thunder-stone", "url": "" } }
                ]),
                vec![],
            )],
        ));

        let edge = &tree.root.as_ref().unwrap().edges[0];
        let details = edge.details.as_ref().unwrap();
        assert_eq!(details.location.as_deref(), Some("mt-coronet"));
        assert!(tree.item_names().is_empty());
    }

    #[test]
    fn test_child_without_details() {
        let tree = tree(link("a", json!([]), vec![link("b", json!([]), vec![])]));
        assert_eq!(tree.root.as_ref().unwrap().edges[0].details, None);
    }

    #[test]
    fn test_held_items_are_collected() {
        let tree = tree(link(
            "onix",
            json!([]),
            vec![link(
                "steelix",
                json!([{ "trigger": { "name": "trade", "url": "" }, "held_item": { "name": "metal-coat", "url": "" } }]),
                vec![],
            )],
        ));
        assert!(tree.item_names().contains("metal-coat"));
    }

    #[test]
    fn test_missing_chain_is_empty() {
        let chain: EvolutionChain = decode(&json!({ "id": 9, "chain": null })).unwrap();
        let tree = EvolutionTree::from_chain(&chain);
        assert!(tree.is_empty());
        assert!(tree.species_names().is_empty());
        assert!(tree.item_names().is_empty());
        assert!(tree.links().is_empty());
    }

    #[test]
    fn test_links_and_find() {
        let tree = tree(link(
            "oddish",
            json!([]),
            vec![link(
                "gloom",
                level_up(21),
                vec![
                    link("vileplume", use_item("leaf-stone"), vec![]),
                    link("bellossom", use_item("sun-stone"), vec![]),
                ],
            )],
        ));

        let pairs: Vec<(&str, &str)> = tree
            .links()
            .into_iter()
            .map(|(from, edge)| (from.species.as_str(), edge.target.species.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("oddish", "gloom"), ("gloom", "vileplume"), ("gloom", "bellossom")]
        );

        assert_eq!(tree.find("gloom").map(|n| n.edges.len()), Some(2));
        assert!(tree.find("pikachu").is_none());
    }
}
