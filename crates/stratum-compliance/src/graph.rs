use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use stratum_core::{ElementKind, Layer, ModelGraph, RelationKind};

/// Node in the analysis graph: the element fields the rules inspect.
#[derive(Debug, Clone)]
pub struct AnalysisNode {
    pub id: String,
    pub name: String,
    pub kind: ElementKind,
    pub layer: Layer,
    pub description: String,
}

/// Edge in the analysis graph.
#[derive(Debug, Clone)]
pub struct AnalysisEdge {
    pub kind: RelationKind,
}

/// Petgraph view of a model, built fresh per validation pass.
///
/// Elements become nodes in insertion order and relations become edges in
/// insertion order, so rule output ordering follows model ordering. A
/// relation whose endpoint is absent from the model is legal there but
/// invisible here.
pub struct AnalysisGraph {
    graph: DiGraph<AnalysisNode, AnalysisEdge>,
    index: HashMap<String, NodeIndex>,
}

impl AnalysisGraph {
    pub fn from_model(model: &ModelGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        for element in model.elements() {
            let idx = graph.add_node(AnalysisNode {
                id: element.id.clone(),
                name: element.name.clone(),
                kind: element.kind,
                layer: element.layer,
                description: element.description.clone(),
            });
            index.insert(element.id.clone(), idx);
        }

        for relation in model.relations() {
            if let (Some(&src), Some(&tgt)) = (
                index.get(&relation.source_id),
                index.get(&relation.target_id),
            ) {
                graph.add_edge(src, tgt, AnalysisEdge { kind: relation.kind });
            }
        }

        Self { graph, index }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &AnalysisNode> + '_ {
        self.graph.node_weights()
    }

    /// Edges in insertion order, with their endpoint nodes.
    pub fn edges_with_nodes(
        &self,
    ) -> impl Iterator<Item = (&AnalysisNode, &AnalysisNode, &AnalysisEdge)> + '_ {
        self.graph.edge_references().map(|e| {
            let src = &self.graph[e.source()];
            let tgt = &self.graph[e.target()];
            (src, tgt, e.weight())
        })
    }

    /// Total degree of the node with the given id: incoming plus outgoing
    /// endpoints, so a self-loop counts twice.
    pub fn degree(&self, id: &str) -> usize {
        match self.index.get(id) {
            Some(&idx) => {
                self.graph.edges_directed(idx, Direction::Incoming).count()
                    + self.graph.edges_directed(idx, Direction::Outgoing).count()
            }
            None => 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::{Element, Relation};

    fn model_with_pair() -> (ModelGraph, String, String) {
        let mut model = ModelGraph::new();
        let a = Element::new(ElementKind::ApplicationComponent, "A", "Component A");
        let b = Element::new(ElementKind::ApplicationComponent, "B", "Component B");
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        model.add_element(a);
        model.add_element(b);
        (model, a_id, b_id)
    }

    #[test]
    fn test_parallel_edges_survive_the_view() {
        let (mut model, a, b) = model_with_pair();
        model.add_relation(Relation::new(&a, &b, RelationKind::Serving));
        model.add_relation(Relation::new(&a, &b, RelationKind::Flow));

        let graph = AnalysisGraph::from_model(&model);
        assert_eq!(graph.edge_count(), 2);
        let kinds: Vec<_> = graph.edges_with_nodes().map(|(_, _, e)| e.kind).collect();
        assert_eq!(kinds, vec![RelationKind::Serving, RelationKind::Flow]);
    }

    #[test]
    fn test_degree_counts_both_directions() {
        let (mut model, a, b) = model_with_pair();
        model.add_relation(Relation::new(&a, &b, RelationKind::Serving));
        model.add_relation(Relation::new(&b, &a, RelationKind::Triggering));

        let graph = AnalysisGraph::from_model(&model);
        assert_eq!(graph.degree(&a), 2);
        assert_eq!(graph.degree(&b), 2);
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let (mut model, a, _) = model_with_pair();
        model.add_relation(Relation::new(&a, &a, RelationKind::Association));

        let graph = AnalysisGraph::from_model(&model);
        assert_eq!(graph.degree(&a), 2);
    }

    #[test]
    fn test_dangling_relations_are_invisible() {
        let (mut model, a, _) = model_with_pair();
        model.add_relation(Relation::new(&a, "nowhere", RelationKind::Flow));

        let graph = AnalysisGraph::from_model(&model);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&a), 0);
        assert_eq!(graph.degree("nowhere"), 0);
    }

    #[test]
    fn test_nodes_iterate_in_insertion_order() {
        let (model, _, _) = model_with_pair();
        let graph = AnalysisGraph::from_model(&model);
        let names: Vec<_> = graph.nodes().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
