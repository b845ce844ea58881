use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::{create_element, Element};
use crate::graph::ModelGraph;
use crate::relation::{Relation, RelationKind};

/// The stable wire form of a graph: nodes and edges in insertion order.
///
/// Field names and ordering are the one cross-component contract — the
/// compliance engine's reconstruction path and any external renderer both
/// consume exactly this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableGraph {
    pub nodes: Vec<Element>,
    pub edges: Vec<Relation>,
}

impl PortableGraph {
    /// Rebuild a graph from a trusted portable form, preserving every field
    /// verbatim.
    pub fn into_graph(self) -> ModelGraph {
        let mut graph = ModelGraph::new();
        for node in self.nodes {
            graph.add_element(node);
        }
        for edge in self.edges {
            graph.add_relation(edge);
        }
        graph
    }
}

impl ModelGraph {
    /// Export to the portable `{nodes, edges}` form, both in insertion
    /// order.
    pub fn to_portable(&self) -> PortableGraph {
        PortableGraph {
            nodes: self.elements().cloned().collect(),
            edges: self.relations().to_vec(),
        }
    }
}

/// Rebuild a graph from an untrusted portable JSON tree.
///
/// Nodes with unrecognized kinds are skipped; recognized nodes keep their
/// exported id, attributes, and tags, so export → restore → export is the
/// identity. Edge endpoints resolve by literal id first, then by
/// case-insensitive name; an edge with an unresolvable endpoint is dropped
/// silently, and an unknown edge kind coerces to Association. Only a
/// malformed shape (non-object input, non-array `nodes`/`edges`, non-object
/// entries) is an error, which the compliance boundary absorbs.
pub fn restore_graph(value: &Value) -> Result<ModelGraph> {
    let root = value
        .as_object()
        .context("portable form is not a JSON object")?;

    let mut graph = ModelGraph::new();
    let mut name_to_id: HashMap<String, String> = HashMap::new();

    for node in section(root.get("nodes"), "nodes")? {
        let node = node.as_object().context("node entry is not an object")?;
        let kind = node.get("type").and_then(Value::as_str).unwrap_or("");
        let name = node.get("name").and_then(Value::as_str).unwrap_or("Unknown");
        let description = node.get("description").and_then(Value::as_str).unwrap_or("");

        let Some(mut element) = create_element(kind, name, description) else {
            tracing::warn!(kind, name, "skipping node with unknown element kind");
            continue;
        };
        if let Some(id) = node.get("id").and_then(Value::as_str) {
            element = element.with_id(id);
        }
        if let Some(attributes) = node.get("attributes").and_then(Value::as_object) {
            element.attributes = attributes.clone();
        }
        if let Some(tags) = node.get("tags").and_then(Value::as_array) {
            element.tags = tags
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect();
        }
        name_to_id.insert(element.name.to_lowercase(), element.id.clone());
        graph.add_element(element);
    }

    for edge in section(root.get("edges"), "edges")? {
        let edge = edge.as_object().context("edge entry is not an object")?;
        let source = resolve_endpoint(edge.get("source_id"), &graph, &name_to_id);
        let target = resolve_endpoint(edge.get("target_id"), &graph, &name_to_id);
        let (Some(source_id), Some(target_id)) = (source, target) else {
            tracing::debug!("dropping edge with unresolved endpoint");
            continue;
        };

        let kind = edge
            .get("type")
            .and_then(Value::as_str)
            .map(RelationKind::parse_lenient)
            .unwrap_or(RelationKind::Association);

        graph.add_relation(Relation {
            source_id,
            target_id,
            kind,
            description: edge
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            bidirectional: edge
                .get("bidirectional")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        });
    }

    Ok(graph)
}

/// A missing or null section reads as empty; a present section must be an
/// array.
fn section<'a>(value: Option<&'a Value>, key: &str) -> Result<&'a [Value]> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => bail!("`{key}` is not an array"),
    }
}

/// Prefer a literal element id; fall back to a case-insensitive name.
fn resolve_endpoint(
    raw: Option<&Value>,
    graph: &ModelGraph,
    name_to_id: &HashMap<String, String>,
) -> Option<String> {
    let raw = raw?.as_str()?;
    if graph.element(raw).is_some() {
        return Some(raw.to_string());
    }
    name_to_id.get(&raw.to_lowercase()).cloned()
}
