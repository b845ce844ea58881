use indexmap::IndexMap;

use crate::element::Element;
use crate::layer::Layer;
use crate::relation::Relation;

/// Directed multigraph of typed elements and relations.
///
/// Elements are keyed by id in insertion order; relations are an ordered
/// collection with no identity of their own, so parallel edges between the
/// same pair — including exact duplicates and self-loops — all survive.
/// Built fresh per request and discarded after export or validation;
/// nothing is shared across requests.
#[derive(Debug, Clone, Default)]
pub struct ModelGraph {
    elements: IndexMap<String, Element>,
    relations: Vec<Relation>,
}

impl ModelGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, keyed by id. Duplicate names are allowed; a
    /// duplicate id replaces the previous element in place.
    pub fn add_element(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Append a relation. No referential check: endpoints may not exist
    /// yet, which keeps partially-built graphs legal during incremental
    /// ingestion. The caller owns endpoint consistency.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// All elements, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values()
    }

    /// Elements of one layer, in insertion order. Each call re-scans.
    pub fn elements_by_layer(&self, layer: Layer) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values().filter(move |e| e.layer == layer)
    }

    /// All relations, in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::kind::ElementKind;
    use crate::relation::RelationKind;

    fn element(kind: ElementKind, name: &str) -> Element {
        Element::new(kind, name, "A well-described element")
    }

    #[test]
    fn test_add_and_get_element() {
        let mut graph = ModelGraph::new();
        let actor = element(ElementKind::BusinessActor, "Customer");
        let id = actor.id.clone();
        graph.add_element(actor);

        assert_eq!(graph.element_count(), 1);
        assert_eq!(graph.element(&id).unwrap().name, "Customer");
        assert!(graph.element("missing").is_none());
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let mut graph = ModelGraph::new();
        graph.add_element(element(ElementKind::ApplicationComponent, "Portal"));
        graph.add_element(element(ElementKind::ApplicationService, "Portal"));
        assert_eq!(graph.element_count(), 2);
    }

    #[test]
    fn test_elements_by_layer_preserves_insertion_order() {
        let mut graph = ModelGraph::new();
        graph.add_element(element(ElementKind::BusinessActor, "First"));
        graph.add_element(element(ElementKind::Node, "Server"));
        graph.add_element(element(ElementKind::BusinessProcess, "Second"));

        let business: Vec<_> = graph
            .elements_by_layer(Layer::Business)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(business, vec!["First", "Second"]);
        assert_eq!(graph.elements_by_layer(Layer::Physical).count(), 0);
    }

    #[test]
    fn test_parallel_edges_are_not_collapsed() {
        let mut graph = ModelGraph::new();
        let a = element(ElementKind::ApplicationComponent, "A");
        let b = element(ElementKind::ApplicationComponent, "B");
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        graph.add_element(a);
        graph.add_element(b);

        graph.add_relation(Relation::new(&a_id, &b_id, RelationKind::Serving));
        graph.add_relation(Relation::new(&a_id, &b_id, RelationKind::Flow));

        assert_eq!(graph.relation_count(), 2);
        let kinds: Vec<_> = graph.relations().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RelationKind::Serving, RelationKind::Flow]);
    }

    #[test]
    fn test_exact_duplicate_relations_survive() {
        let mut graph = ModelGraph::new();
        let a = element(ElementKind::Node, "A");
        let id = a.id.clone();
        graph.add_element(a);

        graph.add_relation(Relation::new(&id, &id, RelationKind::Association));
        graph.add_relation(Relation::new(&id, &id, RelationKind::Association));

        assert_eq!(graph.relation_count(), 2);
    }

    #[test]
    fn test_relation_without_endpoints_is_accepted() {
        let mut graph = ModelGraph::new();
        graph.add_relation(Relation::new("ghost-a", "ghost-b", RelationKind::Flow));
        assert_eq!(graph.relation_count(), 1);
        assert_eq!(graph.element_count(), 0);
    }
}
