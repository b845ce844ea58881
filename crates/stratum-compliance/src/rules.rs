use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use stratum_core::{restore_graph, Layer, ModelGraph};

use crate::config::ComplianceConfig;
use crate::graph::AnalysisGraph;

/// Issue severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" | "med" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(anyhow::anyhow!("unknown severity: {s}")),
        }
    }
}

/// A single rule finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub element: String,
    pub message: String,
}

/// The compliance report contract: integer score in `0..=100`, issues in
/// deterministic order (rule order first, insertion order within a rule),
/// and strict `score > threshold` compliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub score: i32,
    pub issues: Vec<Issue>,
    pub compliant: bool,
}

/// Validate a graph against the default rule set.
pub fn validate(model: &ModelGraph) -> ComplianceReport {
    validate_with_config(model, &ComplianceConfig::default())
}

/// Validate with explicit configuration.
///
/// Rules run in fixed order — orphans, cross-layer, documentation — and
/// each appends to the shared issue list, so report ordering is
/// reproducible for identical input.
pub fn validate_with_config(model: &ModelGraph, config: &ComplianceConfig) -> ComplianceReport {
    let graph = AnalysisGraph::from_model(model);
    let mut issues = Vec::new();
    let mut score = 100i32;

    check_orphans(&graph, config, &mut issues, &mut score);
    check_cross_layer(&graph, config, &mut issues, &mut score);
    check_documentation(&graph, config, &mut issues, &mut score);

    ComplianceReport {
        score: score.max(0),
        issues,
        compliant: score > config.scoring.compliance_threshold,
    }
}

/// Validate an externally supplied portable form with the default rule set.
///
/// Reconstruction failures never propagate: they produce the degenerate
/// zero-score report instead.
pub fn validate_value(value: &Value) -> ComplianceReport {
    validate_value_with_config(value, &ComplianceConfig::default())
}

/// Validate an externally supplied portable form with explicit
/// configuration.
pub fn validate_value_with_config(value: &Value, config: &ComplianceConfig) -> ComplianceReport {
    match restore_graph(value) {
        Ok(model) => validate_with_config(&model, config),
        Err(err) => {
            tracing::warn!(error = %err, "graph reconstruction failed");
            ComplianceReport {
                score: 0,
                issues: vec![Issue {
                    severity: Severity::High,
                    element: "System".to_string(),
                    message: format!("Validation failed due to internal error: {err}"),
                }],
                compliant: false,
            }
        }
    }
}

/// Rule 1: an element with zero total degree is an orphan.
fn check_orphans(
    graph: &AnalysisGraph,
    config: &ComplianceConfig,
    issues: &mut Vec<Issue>,
    score: &mut i32,
) {
    let severity = config.severity("orphan", Severity::Medium);
    for node in graph.nodes() {
        if graph.degree(&node.id) == 0 {
            issues.push(Issue {
                severity,
                element: node.name.clone(),
                message: format!(
                    "Orphan element: '{}' ({}) is not connected to anything.",
                    node.name, node.kind
                ),
            });
            *score -= config.scoring.orphan_penalty;
        }
    }
}

/// Rule 2: a direct Business↔Technology relation, in either direction, is
/// an anti-pattern. No other layer pair triggers.
fn check_cross_layer(
    graph: &AnalysisGraph,
    config: &ComplianceConfig,
    issues: &mut Vec<Issue>,
    score: &mut i32,
) {
    let severity = config.severity("cross_layer", Severity::High);
    for (src, tgt, _) in graph.edges_with_nodes() {
        let crosses = (src.layer == Layer::Business && tgt.layer == Layer::Technology)
            || (src.layer == Layer::Technology && tgt.layer == Layer::Business);
        if crosses {
            issues.push(Issue {
                severity,
                element: format!("{} -> {}", src.name, tgt.name),
                message: format!(
                    "Cross-layer violation: direct connection between {} and {} layers is an anti-pattern. Use the Application layer as a bridge.",
                    src.layer, tgt.layer
                ),
            });
            *score -= config.scoring.cross_layer_penalty;
        }
    }
}

/// Rule 3: every element carries a usable description.
fn check_documentation(
    graph: &AnalysisGraph,
    config: &ComplianceConfig,
    issues: &mut Vec<Issue>,
    score: &mut i32,
) {
    let severity = config.severity("documentation", Severity::Low);
    for node in graph.nodes() {
        if node.description.chars().count() < config.rules.min_description_len {
            issues.push(Issue {
                severity,
                element: node.name.clone(),
                message: "Missing or short description. Documentation is key in TOGAF."
                    .to_string(),
            });
            *score -= config.scoring.documentation_penalty;
        }
    }
}
