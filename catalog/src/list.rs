//! Paginated resource lists (`pokemon?limit=&offset=`, `move?limit=&offset=`)

use serde::Deserialize;

use crate::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}
