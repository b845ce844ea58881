use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rules::Severity;

/// Rule-engine configuration, loadable from TOML.
///
/// Defaults reproduce the canonical rule set exactly; deployments tune
/// penalties, severities, and the compliance threshold without touching the
/// engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplianceConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Per-rule penalties and the compliance threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_orphan_penalty")]
    pub orphan_penalty: i32,
    #[serde(default = "default_cross_layer_penalty")]
    pub cross_layer_penalty: i32,
    #[serde(default = "default_documentation_penalty")]
    pub documentation_penalty: i32,
    /// Strict lower bound: a score equal to the threshold is non-compliant.
    #[serde(default = "default_compliance_threshold")]
    pub compliance_threshold: i32,
}

fn default_orphan_penalty() -> i32 {
    5
}
fn default_cross_layer_penalty() -> i32 {
    10
}
fn default_documentation_penalty() -> i32 {
    1
}
fn default_compliance_threshold() -> i32 {
    80
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            orphan_penalty: default_orphan_penalty(),
            cross_layer_penalty: default_cross_layer_penalty(),
            documentation_penalty: default_documentation_penalty(),
            compliance_threshold: default_compliance_threshold(),
        }
    }
}

/// Rule behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Descriptions shorter than this trip the documentation rule.
    #[serde(default = "default_min_description_len")]
    pub min_description_len: usize,
    /// Per-rule severity overrides, keyed by rule name
    /// (`orphan`, `cross_layer`, `documentation`).
    #[serde(default)]
    pub severities: HashMap<String, Severity>,
}

fn default_min_description_len() -> usize {
    5
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_description_len: default_min_description_len(),
            severities: HashMap::new(),
        }
    }
}

impl ComplianceConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub(crate) fn severity(&self, rule: &str, default: Severity) -> Severity {
        self.rules.severities.get(rule).copied().unwrap_or(default)
    }
}
