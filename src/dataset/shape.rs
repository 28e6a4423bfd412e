//! Marker shape vocabulary shared by features and legend items.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The closed set of marker shapes a scatterplot point can take.
///
/// Matches the shape vocabulary of the rendering collaborator; datasets
/// declaring any other shape string are rejected at parse time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PointShape {
    /// Six-armed asterisk.
    Asterisk,
    /// Filled circle (the neutral default).
    #[default]
    Circle,
    /// Greek cross.
    Cross,
    /// Filled rhombus.
    Diamond,
    /// Plus sign.
    Plus,
    /// Filled square.
    Square,
    /// Five-pointed star.
    Star,
    /// Filled triangle.
    Triangle,
    /// Three-armed Y.
    Wye,
    /// Multiplication sign.
    Times,
}

impl PointShape {
    /// Lowercase name as it appears in data files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asterisk => "asterisk",
            Self::Circle => "circle",
            Self::Cross => "cross",
            Self::Diamond => "diamond",
            Self::Plus => "plus",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::Wye => "wye",
            Self::Times => "times",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&PointShape::Wye).unwrap();
        assert_eq!(json, "\"wye\"");
        let parsed: PointShape = serde_json::from_str("\"triangle\"").unwrap();
        assert_eq!(parsed, PointShape::Triangle);
    }

    #[test]
    fn unknown_shape_rejected() {
        assert!(serde_json::from_str::<PointShape>("\"hexagon\"").is_err());
    }
}
