use std::collections::HashMap;

use serde_json::Value;

use stratum_core::{create_element, ModelGraph, Relation, RelationKind};

/// Top-level keys the generation schema uses, one array per layer.
/// Composite elements (Grouping, Location) may appear under any of them —
/// the kind, not the key, decides the layer.
const LAYER_KEYS: [&str; 7] = [
    "strategy_layer",
    "business_layer",
    "application_layer",
    "technology_layer",
    "physical_layer",
    "motivation_layer",
    "implementation_layer",
];

/// Build a model graph from an extracted generation tree.
///
/// Every anomaly here is soft: entries with an unknown element kind are
/// logged and skipped, relationships with an unknown kind coerce to
/// Association, and relationships naming an unregistered endpoint are
/// dropped. Endpoint names resolve case-insensitively; on a name collision
/// the last registration wins.
pub fn assemble_graph(data: &Value) -> ModelGraph {
    let mut graph = ModelGraph::new();
    let mut name_to_id: HashMap<String, String> = HashMap::new();

    for key in LAYER_KEYS {
        let Some(entries) = data.get(key).and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            let kind = entry.get("type").and_then(Value::as_str).unwrap_or("");
            let name = entry.get("name").and_then(Value::as_str).unwrap_or("Unknown");
            let description = entry.get("description").and_then(Value::as_str).unwrap_or("");

            match create_element(kind, name, description) {
                Some(element) => {
                    name_to_id.insert(element.name.to_lowercase(), element.id.clone());
                    graph.add_element(element);
                }
                None => tracing::warn!(kind, name, "unknown element kind"),
            }
        }
    }

    let relationships = data
        .get("relationships")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    for rel in relationships {
        let source = rel.get("source").and_then(Value::as_str).unwrap_or("").to_lowercase();
        let target = rel.get("target").and_then(Value::as_str).unwrap_or("").to_lowercase();

        let (Some(source_id), Some(target_id)) = (name_to_id.get(&source), name_to_id.get(&target))
        else {
            tracing::debug!(%source, %target, "dropping relationship with unregistered endpoint");
            continue;
        };

        let kind = rel
            .get("type")
            .and_then(Value::as_str)
            .map(RelationKind::parse_lenient)
            .unwrap_or(RelationKind::Association);

        graph.add_relation(Relation {
            source_id: source_id.clone(),
            target_id: target_id.clone(),
            kind,
            description: rel
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            bidirectional: false,
        });
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stratum_core::{ElementKind, Layer};

    #[test]
    fn test_assemble_builds_elements_and_relations() {
        let data = json!({
            "business_layer": [
                {"type": "BusinessActor", "name": "Customer", "description": "Retail customer"}
            ],
            "application_layer": [
                {"type": "ApplicationComponent", "name": "Portal", "description": "Web portal"}
            ],
            "relationships": [
                {"source": "Portal", "target": "Customer", "type": "Serving", "description": "serves"}
            ]
        });

        let graph = assemble_graph(&data);
        assert_eq!(graph.element_count(), 2);
        assert_eq!(graph.relation_count(), 1);

        let edge = &graph.relations()[0];
        assert_eq!(edge.kind, RelationKind::Serving);
        assert_eq!(edge.description, "serves");
        assert_eq!(graph.element(&edge.source_id).unwrap().name, "Portal");
        assert_eq!(graph.element(&edge.target_id).unwrap().name, "Customer");
    }

    #[test]
    fn test_unknown_element_kind_is_skipped() {
        let data = json!({
            "technology_layer": [
                {"type": "Node", "name": "db-01", "description": "Primary database"},
                {"type": "Mainframe9000", "name": "legacy", "description": "not in the registry"}
            ]
        });

        let graph = assemble_graph(&data);
        assert_eq!(graph.element_count(), 1);
    }

    #[test]
    fn test_unknown_relationship_kind_coerces_to_association() {
        let data = json!({
            "business_layer": [
                {"type": "BusinessActor", "name": "A", "description": "actor a"},
                {"type": "BusinessRole", "name": "B", "description": "role b"}
            ],
            "relationships": [
                {"source": "A", "target": "B", "type": "collaborates-with"}
            ]
        });

        let graph = assemble_graph(&data);
        assert_eq!(graph.relations()[0].kind, RelationKind::Association);
    }

    #[test]
    fn test_relationship_with_unregistered_endpoint_is_dropped() {
        let data = json!({
            "business_layer": [
                {"type": "BusinessActor", "name": "A", "description": "actor a"}
            ],
            "relationships": [
                {"source": "A", "target": "Ghost", "type": "Serving"}
            ]
        });

        let graph = assemble_graph(&data);
        assert_eq!(graph.relation_count(), 0);
    }

    #[test]
    fn test_endpoint_names_resolve_case_insensitively() {
        let data = json!({
            "motivation_layer": [
                {"type": "Goal", "name": "Resilience", "description": "Stay up"},
                {"type": "Driver", "name": "Regulation", "description": "New rules"}
            ],
            "relationships": [
                {"source": "REGULATION", "target": "resilience", "type": "Influence"}
            ]
        });

        let graph = assemble_graph(&data);
        assert_eq!(graph.relation_count(), 1);
        assert_eq!(graph.relations()[0].kind, RelationKind::Influence);
    }

    #[test]
    fn test_kind_decides_layer_regardless_of_key() {
        // A grouping listed under the business key still lands in Composite.
        let data = json!({
            "business_layer": [
                {"type": "Grouping", "name": "Back office", "description": "Grouping"}
            ]
        });

        let graph = assemble_graph(&data);
        let element = graph.elements().next().unwrap();
        assert_eq!(element.kind, ElementKind::Grouping);
        assert_eq!(element.layer, Layer::Composite);
        assert_eq!(graph.elements_by_layer(Layer::Business).count(), 0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let data = json!({
            "business_layer": [
                {"type": "BusinessActor"}
            ]
        });

        let graph = assemble_graph(&data);
        let element = graph.elements().next().unwrap();
        assert_eq!(element.name, "Unknown");
        assert_eq!(element.description, "");
    }

    #[test]
    fn test_empty_tree_yields_empty_graph() {
        let graph = assemble_graph(&json!({}));
        assert_eq!(graph.element_count(), 0);
        assert_eq!(graph.relation_count(), 0);
    }
}
