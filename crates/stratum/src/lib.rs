//! Stratum turns free-text output from a text-generation service into a
//! typed enterprise-architecture graph and scores it against structural
//! rules.
//!
//! The pipeline: [`extract_json`] recovers one JSON object from raw text,
//! [`assemble_graph`] builds the typed graph through the element factory,
//! and [`validate`] scores the result. Graphs travel between components as
//! the portable `{nodes, edges}` form, which [`validate_value`] accepts
//! directly for standalone validation requests.
//!
//! Every component is synchronous and pure with respect to its input; a
//! graph lives for one request and is discarded after export or validation.

pub mod assemble;

pub use assemble::assemble_graph;
pub use stratum_compliance::{
    validate, validate_value, ComplianceConfig, ComplianceReport, Issue, Severity,
};
pub use stratum_core::{
    create_element, restore_graph, Element, ElementKind, Layer, ModelGraph, PortableGraph,
    Relation, RelationKind,
};
pub use stratum_extract::{extract_json, ExtractError};

/// Extract and assemble in one step: raw generated text to a typed graph.
pub fn model_from_text(text: &str) -> Result<ModelGraph, ExtractError> {
    let data = extract_json(text)?;
    Ok(assemble_graph(&data))
}
