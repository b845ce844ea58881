use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layer::Layer;

/// The closed registry of element kinds.
///
/// Each kind belongs to exactly one [`Layer`]; [`ElementKind::layer`] is the
/// single source of that binding. The set is fixed — unknown kind names
/// resolve to `None` at the factory and are skipped by callers rather than
/// treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    // Strategy
    Resource,
    Capability,
    CourseOfAction,
    ValueStream,

    // Business
    BusinessActor,
    BusinessRole,
    BusinessCollaboration,
    BusinessInterface,
    BusinessProcess,
    BusinessFunction,
    BusinessInteraction,
    BusinessEvent,
    BusinessService,
    BusinessObject,
    Contract,
    Representation,
    Product,

    // Application
    ApplicationComponent,
    ApplicationCollaboration,
    ApplicationInterface,
    ApplicationFunction,
    ApplicationInteraction,
    ApplicationProcess,
    ApplicationEvent,
    ApplicationService,
    DataObject,

    // Technology
    Node,
    Device,
    SystemSoftware,
    TechnologyCollaboration,
    TechnologyInterface,
    Path,
    CommunicationNetwork,
    TechnologyFunction,
    TechnologyProcess,
    TechnologyInteraction,
    TechnologyEvent,
    TechnologyService,
    Artifact,

    // Physical
    Facility,
    Equipment,
    DistributionNetwork,
    Material,

    // Motivation
    Stakeholder,
    Driver,
    Assessment,
    Goal,
    Outcome,
    Principle,
    Requirement,
    Constraint,
    Meaning,
    Value,

    // Implementation & Migration
    WorkPackage,
    Deliverable,
    ImplementationEvent,
    Plateau,
    Gap,

    // Composite
    Grouping,
    Location,
}

const ALL_KINDS: &[ElementKind] = &[
    ElementKind::Resource,
    ElementKind::Capability,
    ElementKind::CourseOfAction,
    ElementKind::ValueStream,
    ElementKind::BusinessActor,
    ElementKind::BusinessRole,
    ElementKind::BusinessCollaboration,
    ElementKind::BusinessInterface,
    ElementKind::BusinessProcess,
    ElementKind::BusinessFunction,
    ElementKind::BusinessInteraction,
    ElementKind::BusinessEvent,
    ElementKind::BusinessService,
    ElementKind::BusinessObject,
    ElementKind::Contract,
    ElementKind::Representation,
    ElementKind::Product,
    ElementKind::ApplicationComponent,
    ElementKind::ApplicationCollaboration,
    ElementKind::ApplicationInterface,
    ElementKind::ApplicationFunction,
    ElementKind::ApplicationInteraction,
    ElementKind::ApplicationProcess,
    ElementKind::ApplicationEvent,
    ElementKind::ApplicationService,
    ElementKind::DataObject,
    ElementKind::Node,
    ElementKind::Device,
    ElementKind::SystemSoftware,
    ElementKind::TechnologyCollaboration,
    ElementKind::TechnologyInterface,
    ElementKind::Path,
    ElementKind::CommunicationNetwork,
    ElementKind::TechnologyFunction,
    ElementKind::TechnologyProcess,
    ElementKind::TechnologyInteraction,
    ElementKind::TechnologyEvent,
    ElementKind::TechnologyService,
    ElementKind::Artifact,
    ElementKind::Facility,
    ElementKind::Equipment,
    ElementKind::DistributionNetwork,
    ElementKind::Material,
    ElementKind::Stakeholder,
    ElementKind::Driver,
    ElementKind::Assessment,
    ElementKind::Goal,
    ElementKind::Outcome,
    ElementKind::Principle,
    ElementKind::Requirement,
    ElementKind::Constraint,
    ElementKind::Meaning,
    ElementKind::Value,
    ElementKind::WorkPackage,
    ElementKind::Deliverable,
    ElementKind::ImplementationEvent,
    ElementKind::Plateau,
    ElementKind::Gap,
    ElementKind::Grouping,
    ElementKind::Location,
];

impl ElementKind {
    /// Every registered kind, grouped by layer in canonical order.
    pub fn all() -> &'static [ElementKind] {
        ALL_KINDS
    }

    /// The layer this kind is permanently bound to.
    pub fn layer(&self) -> Layer {
        use ElementKind::*;
        match self {
            Resource | Capability | CourseOfAction | ValueStream => Layer::Strategy,

            BusinessActor | BusinessRole | BusinessCollaboration | BusinessInterface
            | BusinessProcess | BusinessFunction | BusinessInteraction | BusinessEvent
            | BusinessService | BusinessObject | Contract | Representation | Product => {
                Layer::Business
            }

            ApplicationComponent | ApplicationCollaboration | ApplicationInterface
            | ApplicationFunction | ApplicationInteraction | ApplicationProcess
            | ApplicationEvent | ApplicationService | DataObject => Layer::Application,

            Node | Device | SystemSoftware | TechnologyCollaboration | TechnologyInterface
            | Path | CommunicationNetwork | TechnologyFunction | TechnologyProcess
            | TechnologyInteraction | TechnologyEvent | TechnologyService | Artifact => {
                Layer::Technology
            }

            Facility | Equipment | DistributionNetwork | Material => Layer::Physical,

            Stakeholder | Driver | Assessment | Goal | Outcome | Principle | Requirement
            | Constraint | Meaning | Value => Layer::Motivation,

            WorkPackage | Deliverable | ImplementationEvent | Plateau | Gap => {
                Layer::Implementation
            }

            Grouping | Location => Layer::Composite,
        }
    }

    /// Canonical identifier, identical to the wire form.
    pub fn as_str(&self) -> &'static str {
        use ElementKind::*;
        match self {
            Resource => "Resource",
            Capability => "Capability",
            CourseOfAction => "CourseOfAction",
            ValueStream => "ValueStream",
            BusinessActor => "BusinessActor",
            BusinessRole => "BusinessRole",
            BusinessCollaboration => "BusinessCollaboration",
            BusinessInterface => "BusinessInterface",
            BusinessProcess => "BusinessProcess",
            BusinessFunction => "BusinessFunction",
            BusinessInteraction => "BusinessInteraction",
            BusinessEvent => "BusinessEvent",
            BusinessService => "BusinessService",
            BusinessObject => "BusinessObject",
            Contract => "Contract",
            Representation => "Representation",
            Product => "Product",
            ApplicationComponent => "ApplicationComponent",
            ApplicationCollaboration => "ApplicationCollaboration",
            ApplicationInterface => "ApplicationInterface",
            ApplicationFunction => "ApplicationFunction",
            ApplicationInteraction => "ApplicationInteraction",
            ApplicationProcess => "ApplicationProcess",
            ApplicationEvent => "ApplicationEvent",
            ApplicationService => "ApplicationService",
            DataObject => "DataObject",
            Node => "Node",
            Device => "Device",
            SystemSoftware => "SystemSoftware",
            TechnologyCollaboration => "TechnologyCollaboration",
            TechnologyInterface => "TechnologyInterface",
            Path => "Path",
            CommunicationNetwork => "CommunicationNetwork",
            TechnologyFunction => "TechnologyFunction",
            TechnologyProcess => "TechnologyProcess",
            TechnologyInteraction => "TechnologyInteraction",
            TechnologyEvent => "TechnologyEvent",
            TechnologyService => "TechnologyService",
            Artifact => "Artifact",
            Facility => "Facility",
            Equipment => "Equipment",
            DistributionNetwork => "DistributionNetwork",
            Material => "Material",
            Stakeholder => "Stakeholder",
            Driver => "Driver",
            Assessment => "Assessment",
            Goal => "Goal",
            Outcome => "Outcome",
            Principle => "Principle",
            Requirement => "Requirement",
            Constraint => "Constraint",
            Meaning => "Meaning",
            Value => "Value",
            WorkPackage => "WorkPackage",
            Deliverable => "Deliverable",
            ImplementationEvent => "ImplementationEvent",
            Plateau => "Plateau",
            Gap => "Gap",
            Grouping => "Grouping",
            Location => "Location",
        }
    }

    /// Resolve a kind name against the registry.
    ///
    /// Names are canonicalized (case folded, separators stripped) before the
    /// lookup, so `"BusinessActor"`, `"business actor"` and `"Business_Actor"`
    /// all resolve to the same kind. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<ElementKind> {
        let needle = canonicalize(name);
        if needle.is_empty() {
            return None;
        }
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| canonicalize(kind.as_str()) == needle)
    }
}

/// Case-fold and drop anything that isn't a letter or digit.
fn canonicalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size_per_layer() {
        let count = |layer: Layer| {
            ElementKind::all()
                .iter()
                .filter(|k| k.layer() == layer)
                .count()
        };
        assert_eq!(count(Layer::Strategy), 4);
        assert_eq!(count(Layer::Business), 13);
        assert_eq!(count(Layer::Application), 9);
        assert_eq!(count(Layer::Technology), 13);
        assert_eq!(count(Layer::Physical), 4);
        assert_eq!(count(Layer::Motivation), 10);
        assert_eq!(count(Layer::Implementation), 5);
        assert_eq!(count(Layer::Composite), 2);
        assert_eq!(ElementKind::all().len(), 60);
    }

    #[test]
    fn test_parse_round_trips_every_canonical_name() {
        for kind in ElementKind::all() {
            assert_eq!(ElementKind::parse(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn test_parse_accepts_spacing_and_case_aliases() {
        assert_eq!(
            ElementKind::parse("business actor"),
            Some(ElementKind::BusinessActor)
        );
        assert_eq!(
            ElementKind::parse("BUSINESS_ACTOR"),
            Some(ElementKind::BusinessActor)
        );
        assert_eq!(
            ElementKind::parse("Course-Of-Action"),
            Some(ElementKind::CourseOfAction)
        );
        assert_eq!(
            ElementKind::parse("system software"),
            Some(ElementKind::SystemSoftware)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(ElementKind::parse("FluxCapacitor"), None);
        assert_eq!(ElementKind::parse(""), None);
        assert_eq!(ElementKind::parse("   "), None);
    }

    #[test]
    fn test_wire_form_matches_canonical_name() {
        for kind in ElementKind::all() {
            let wire = serde_json::to_value(kind).unwrap();
            assert_eq!(wire, serde_json::Value::String(kind.as_str().to_string()));
        }
    }
}
