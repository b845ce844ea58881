pub mod element;
pub mod graph;
pub mod kind;
pub mod layer;
pub mod portable;
pub mod relation;

pub use element::{create_element, Element};
pub use graph::ModelGraph;
pub use kind::ElementKind;
pub use layer::Layer;
pub use portable::{restore_graph, PortableGraph};
pub use relation::{Relation, RelationKind};
