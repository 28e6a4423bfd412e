use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Legend", inline)]
#[serde(default)]
/// Legend bucketing limits.
pub struct LegendOptions {
    /// Most frequent values shown individually before the rest aggregates
    /// into the Other bucket. Zero routes every non-null value to Other.
    #[schemars(title = "Max Visible Values")]
    pub max_visible_values: usize,
    /// Whether the aggregated Other bucket appears at all.
    #[schemars(title = "Include Other")]
    pub include_other: bool,
    /// Whether legend entries render their marker shape next to the color
    /// swatch.
    #[schemars(title = "Include Shapes")]
    pub include_shapes: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            max_visible_values: 10,
            include_other: true,
            include_shapes: false,
        }
    }
}
