use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 8 fixed architectural layers.
///
/// Every element kind is statically bound to exactly one layer; the binding
/// lives on [`crate::ElementKind::layer`] and never changes after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Strategy,
    Business,
    Application,
    Technology,
    Physical,
    Motivation,
    #[serde(rename = "Implementation & Migration")]
    Implementation,
    Composite,
}

impl Layer {
    /// All layers, in canonical order.
    pub fn all() -> &'static [Layer] {
        &[
            Layer::Strategy,
            Layer::Business,
            Layer::Application,
            Layer::Technology,
            Layer::Physical,
            Layer::Motivation,
            Layer::Implementation,
            Layer::Composite,
        ]
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Strategy => write!(f, "Strategy"),
            Layer::Business => write!(f, "Business"),
            Layer::Application => write!(f, "Application"),
            Layer::Technology => write!(f, "Technology"),
            Layer::Physical => write!(f, "Physical"),
            Layer::Motivation => write!(f, "Motivation"),
            Layer::Implementation => write!(f, "Implementation & Migration"),
            Layer::Composite => write!(f, "Composite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_eight_layers() {
        assert_eq!(Layer::all().len(), 8);
    }

    #[test]
    fn test_display_matches_wire_form() {
        for layer in Layer::all() {
            let wire = serde_json::to_value(layer).unwrap();
            assert_eq!(wire, serde_json::Value::String(layer.to_string()));
        }
    }

    #[test]
    fn test_implementation_layer_serializes_with_ampersand() {
        let wire = serde_json::to_value(Layer::Implementation).unwrap();
        assert_eq!(wire, "Implementation & Migration");
        let back: Layer = serde_json::from_value(wire).unwrap();
        assert_eq!(back, Layer::Implementation);
    }
}
