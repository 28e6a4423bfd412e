use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Interaction timing parameters.
pub struct InteractionOptions {
    /// Trailing-debounce delay for legend drag-reorder commits, in
    /// milliseconds.
    #[schemars(title = "Drag Debounce (ms)")]
    pub drag_debounce_ms: u64,
}

impl InteractionOptions {
    /// The drag debounce delay as a [`Duration`].
    #[must_use]
    pub fn drag_debounce(&self) -> Duration {
        Duration::from_millis(self.drag_debounce_ms)
    }
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            drag_debounce_ms: 100,
        }
    }
}
