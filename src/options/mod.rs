//! Centralized legend/interaction options with TOML preset support.
//!
//! All tweakable settings (legend limits, neutral styles, interaction
//! timing) are consolidated here. Options serialize to/from TOML for
//! presets, and export a JSON Schema for UI-driven configuration panels.

mod interaction;
mod legend;
mod style;

use std::path::Path;

pub use interaction::InteractionOptions;
pub use legend::LegendOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::StyleOptions;

use crate::error::ProtscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[legend]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Legend bucketing limits.
    pub legend: LegendOptions,
    /// Neutral styles and legend stroke colors.
    pub style: StyleOptions,
    /// Interaction timing parameters.
    pub interaction: InteractionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ProtscapeError> {
        let content =
            std::fs::read_to_string(path).map_err(ProtscapeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ProtscapeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ProtscapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtscapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ProtscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(ProtscapeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[legend]
max_visible_values = 5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.legend.max_visible_values, 5);
        // Everything else should be default
        assert!(opts.legend.include_other);
        assert_eq!(opts.style.other_color, "#888888");
        assert_eq!(opts.interaction.drag_debounce_ms, 100);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("legend"));
        assert!(props.contains_key("style"));
        assert!(props.contains_key("interaction"));
    }
}
