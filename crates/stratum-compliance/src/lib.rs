pub mod config;
pub mod graph;
pub mod rules;

pub use config::{ComplianceConfig, RulesConfig, ScoringConfig};
pub use graph::AnalysisGraph;
pub use rules::{
    validate, validate_value, validate_value_with_config, validate_with_config, ComplianceReport,
    Issue, Severity,
};
