use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 12 canonical relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    // Structural
    Composition,
    Aggregation,
    Assignment,
    Realization,

    // Dynamic
    Serving,
    Access,
    Influence,
    Triggering,
    Flow,

    // Other
    Association,
    Specialization,
    Junction,
}

impl RelationKind {
    /// Canonical identifier, identical to the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Composition => "Composition",
            RelationKind::Aggregation => "Aggregation",
            RelationKind::Assignment => "Assignment",
            RelationKind::Realization => "Realization",
            RelationKind::Serving => "Serving",
            RelationKind::Access => "Access",
            RelationKind::Influence => "Influence",
            RelationKind::Triggering => "Triggering",
            RelationKind::Flow => "Flow",
            RelationKind::Association => "Association",
            RelationKind::Specialization => "Specialization",
            RelationKind::Junction => "Junction",
        }
    }

    /// Parse a kind name, coercing anything unrecognized to `Association`.
    /// Generated model output routinely invents relationship names.
    pub fn parse_lenient(name: &str) -> RelationKind {
        name.parse().unwrap_or(RelationKind::Association)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "composition" => Ok(RelationKind::Composition),
            "aggregation" => Ok(RelationKind::Aggregation),
            "assignment" => Ok(RelationKind::Assignment),
            "realization" => Ok(RelationKind::Realization),
            "serving" => Ok(RelationKind::Serving),
            "access" => Ok(RelationKind::Access),
            "influence" => Ok(RelationKind::Influence),
            "triggering" => Ok(RelationKind::Triggering),
            "flow" => Ok(RelationKind::Flow),
            "association" => Ok(RelationKind::Association),
            "specialization" => Ok(RelationKind::Specialization),
            "junction" => Ok(RelationKind::Junction),
            _ => Err(anyhow::anyhow!("unknown relationship kind: {s}")),
        }
    }
}

/// A directed labeled edge between two elements.
///
/// Relations have no independent identity: the same ordered pair may carry
/// any number of parallel relations, including exact duplicates and
/// self-loops. Nothing here checks that the endpoints exist — the graph
/// accepts transient dangling references during incremental ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub source_id: String,
    pub target_id: String,
    #[serde(rename = "type")]
    pub kind: RelationKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bidirectional: bool,
}

impl Relation {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
            description: String::new(),
            bidirectional: false,
        }
    }
}
