use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dataset::PointShape;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Style", inline)]
#[serde(default)]
/// Neutral fallback styles and legend stroke colors.
pub struct StyleOptions {
    /// Color of the aggregated Other bucket.
    #[schemars(title = "Other Color")]
    pub other_color: String,
    /// Marker shape of the Other bucket.
    #[schemars(title = "Other Shape")]
    pub other_shape: PointShape,
    /// Color for the null category and for failed style lookups.
    #[schemars(title = "Null Color")]
    pub null_color: String,
    /// Marker shape for the null category and for failed style lookups.
    #[schemars(title = "Null Shape")]
    pub null_shape: PointShape,
    /// Stroke color of unselected legend swatches.
    #[schemars(title = "Default Stroke")]
    pub default_stroke: String,
    /// Stroke color of legend swatches whose value is selected.
    #[schemars(title = "Selected Stroke")]
    pub selected_stroke: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            other_color: "#888888".to_owned(),
            other_shape: PointShape::Circle,
            null_color: "#888888".to_owned(),
            null_shape: PointShape::Circle,
            default_stroke: "#394150".to_owned(),
            selected_stroke: "#00A3E0".to_owned(),
        }
    }
}
