//! Legend classification pipeline.
//!
//! Turns a frequency map over the currently-displayed proteins into a
//! bounded, orderable legend item list: the top-N most frequent values get
//! their own entries, the long tail aggregates into a single `Other` bucket,
//! null keeps its own entry (never absorbed into Other), and values the user
//! pulled out of Other individually stay extracted as long as they occur in
//! the displayed data.
//!
//! [`frequency`] counts, [`classify`] buckets, [`z_order`] maintains draw
//! order, [`visibility`] tracks hidden values. All of it is pure state
//! logic; the scatterplot and legend renderers consume the results.

pub mod classify;
pub mod frequency;
pub mod visibility;
pub mod z_order;

use std::fmt;

pub use classify::{Classification, LegendClassifier, LegendItem};
pub use frequency::{count_frequencies, DisplayedRows, FrequencyMap};
pub use visibility::HiddenValueSet;

/// Hidden-value key for the null category.
pub const NULL_KEY: &str = "null";

/// Hidden-value key for the aggregated Other bucket.
pub const OTHER_KEY: &str = "Other";

/// What a legend entry stands for: a concrete feature value, the null
/// category, or the aggregated Other bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LegendValue {
    /// A concrete categorical value.
    Value(String),
    /// The null / missing-value category.
    Null,
    /// The aggregated bucket for values beyond the top-N.
    Other,
}

impl LegendValue {
    /// Build from a resolved per-protein value.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        value.map_or(Self::Null, |v| Self::Value(v.to_owned()))
    }

    /// String key used by [`HiddenValueSet`] and the emitted z-order map.
    ///
    /// Null encodes as the literal `"null"`, Other as `"Other"`.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Value(v) => v.as_str(),
            Self::Null => NULL_KEY,
            Self::Other => OTHER_KEY,
        }
    }

    /// The concrete value string, if this entry is one.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v.as_str()),
            Self::Null | Self::Other => None,
        }
    }

    /// Whether this entry stands for the given resolved value.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::Value(v) => value == Some(v.as_str()),
            Self::Null => value.is_none(),
            Self::Other => false,
        }
    }
}

impl fmt::Display for LegendValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_encoding() {
        assert_eq!(LegendValue::Value("Kinase".to_owned()).key(), "Kinase");
        assert_eq!(LegendValue::Null.key(), "null");
        assert_eq!(LegendValue::Other.key(), "Other");
    }

    #[test]
    fn matches_resolved_values() {
        let kinase = LegendValue::Value("Kinase".to_owned());
        assert!(kinase.matches(Some("Kinase")));
        assert!(!kinase.matches(None));
        assert!(LegendValue::Null.matches(None));
        assert!(!LegendValue::Other.matches(Some("Kinase")));
    }
}
