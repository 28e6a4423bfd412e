//! Hidden-value tracking for legend-driven show/hide toggles.

use rustc_hash::FxHashSet;

use super::{LegendValue, NULL_KEY};
use crate::dataset::Feature;

/// The set of feature value keys currently toggled off.
///
/// Keys use the legend encoding: the null category is stored as the literal
/// `"null"`. The rendering layer reads [`HiddenValueSet::is_hidden`] to
/// fade or skip points; this core only tracks membership.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HiddenValueSet {
    hidden: FxHashSet<String>,
}

impl HiddenValueSet {
    /// Empty set — everything visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given key is toggled off.
    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.contains(key)
    }

    /// Whether a legend entry is toggled off.
    #[must_use]
    pub fn is_value_hidden(&self, value: &LegendValue) -> bool {
        self.is_hidden(value.key())
    }

    /// Toggle a key; returns `true` when the key is now hidden.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.hidden.remove(key) {
            false
        } else {
            let _ = self.hidden.insert(key.to_owned());
            true
        }
    }

    /// Hide every key except `kept`.
    pub fn show_only(&mut self, kept: &str, all_keys: &[String]) {
        self.hidden.clear();
        self.hidden
            .extend(all_keys.iter().filter(|k| *k != kept).cloned());
    }

    /// Make everything visible again.
    pub fn clear(&mut self) {
        self.hidden.clear();
    }

    /// Number of hidden keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    /// Whether nothing is hidden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    /// Hidden keys in sorted order (deterministic for persistence).
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> =
            self.hidden.iter().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Replace the set wholesale (session restore; input is deduplicated by
    /// construction of the set).
    pub fn replace<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.hidden = keys.into_iter().collect();
    }

    /// Reset to all-visible when every declared value of `feature` is
    /// hidden — an all-hidden plot is never what the user wanted.
    ///
    /// Returns `true` when the reset fired.
    pub fn auto_reset_if_all_hidden(&mut self, feature: &Feature) -> bool {
        if self.hidden.is_empty() || feature.values.is_empty() {
            return false;
        }
        let all_hidden = feature
            .values
            .iter()
            .all(|v| self.is_hidden(v.as_deref().unwrap_or(NULL_KEY)));
        if all_hidden {
            self.hidden.clear();
        }
        all_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PointShape;

    fn feature(values: &[Option<&str>]) -> Feature {
        Feature {
            values: values.iter().map(|v| v.map(str::to_owned)).collect(),
            colors: vec!["#888888".to_owned(); values.len()],
            shapes: vec![PointShape::Circle; values.len()],
        }
    }

    #[test]
    fn toggle_flips_membership() {
        let mut hidden = HiddenValueSet::new();
        assert!(hidden.toggle("A"));
        assert!(hidden.is_hidden("A"));
        assert!(!hidden.toggle("A"));
        assert!(!hidden.is_hidden("A"));
    }

    #[test]
    fn null_encodes_as_literal_key() {
        let mut hidden = HiddenValueSet::new();
        assert!(hidden.toggle(LegendValue::Null.key()));
        assert!(hidden.is_hidden("null"));
        assert!(hidden.is_value_hidden(&LegendValue::Null));
    }

    #[test]
    fn show_only_hides_the_rest() {
        let mut hidden = HiddenValueSet::new();
        let keys: Vec<String> =
            ["A", "B", "null"].iter().map(|&k| k.to_owned()).collect();
        hidden.show_only("B", &keys);
        assert!(hidden.is_hidden("A"));
        assert!(!hidden.is_hidden("B"));
        assert!(hidden.is_hidden("null"));
    }

    #[test]
    fn auto_reset_fires_only_when_all_declared_values_hidden() {
        let feature = feature(&[Some("A"), Some("B"), None]);
        let mut hidden = HiddenValueSet::new();
        let _ = hidden.toggle("A");
        let _ = hidden.toggle("B");
        assert!(!hidden.auto_reset_if_all_hidden(&feature));
        assert_eq!(hidden.len(), 2);

        let _ = hidden.toggle("null");
        assert!(hidden.auto_reset_if_all_hidden(&feature));
        assert!(hidden.is_empty());
    }

    #[test]
    fn sorted_keys_are_deterministic() {
        let mut hidden = HiddenValueSet::new();
        let _ = hidden.toggle("zeta");
        let _ = hidden.toggle("alpha");
        let _ = hidden.toggle("null");
        assert_eq!(hidden.sorted_keys(), ["alpha", "null", "zeta"]);
    }
}
