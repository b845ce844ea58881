use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::kind::ElementKind;
use crate::layer::Layer;

/// A typed node in the architecture model.
///
/// Identity is the generated `id`, never the name: names may collide freely
/// and are reconciled (case-insensitively) by the ingestion side. Elements
/// are treated as immutable after construction, with one tolerated
/// exception: reconstruction from a portable form overrides the fresh id
/// with the exported one so edge references stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub layer: Layer,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Element {
    /// Construct an element of the given kind with a fresh UUIDv4 id.
    /// The layer comes from the kind's static binding.
    pub fn new(kind: ElementKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            layer: kind.layer(),
            kind,
            attributes: Map::new(),
            tags: BTreeSet::new(),
        }
    }

    /// Replace the generated id. Only portable-form reconstruction uses
    /// this, to keep existing edge references pointing at the right node.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Create an element from a kind name.
///
/// Unknown names yield `None` — never an error. Upstream model output is
/// untrusted; callers log the miss and skip the entry.
pub fn create_element(kind_name: &str, name: &str, description: &str) -> Option<Element> {
    ElementKind::parse(kind_name).map(|kind| Element::new(kind, name, description))
}
