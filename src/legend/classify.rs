//! Frequency map → bounded legend item list.

use rustc_hash::FxHashSet;

use super::frequency::FrequencyMap;
use super::LegendValue;
use crate::dataset::{Feature, PointShape};
use crate::options::{LegendOptions, StyleOptions};

/// One renderable legend entry: a feature value, the Other bucket, or null,
/// with its occurrence count and draw order.
///
/// The item with the smallest `z_order` is the first legend entry and is
/// painted first (bottom layer); the largest `z_order` paints last and wins
/// overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    /// What this entry stands for.
    pub value: LegendValue,
    /// Display color (hex).
    pub color: String,
    /// Marker shape.
    pub shape: PointShape,
    /// Occurrences among the displayed proteins.
    pub count: usize,
    /// Whether the value is currently shown on the plot.
    pub is_visible: bool,
    /// Position in legend/draw order; contiguous `0..n-1` across the list.
    pub z_order: usize,
    /// Whether the user pulled this entry out of the Other bucket.
    pub extracted_from_other: bool,
}

/// Result of classifying a frequency map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    /// Legend entries in draw order (`z_order` ascending, contiguous).
    pub items: Vec<LegendItem>,
    /// `(value, count)` pairs aggregated inside the Other bucket, most
    /// frequent first. Values shown individually are excluded.
    pub other_pool: Vec<(String, usize)>,
}

/// Turns frequency counts into a bounded legend item list.
///
/// Pure: identical inputs always yield identical output, including order.
/// Sorting is by count descending; ties break by the value's index in the
/// feature's declared `values` sequence ascending, with undeclared values
/// after declared ones, ordered by value string.
#[derive(Debug, Clone, Copy)]
pub struct LegendClassifier<'a> {
    legend: &'a LegendOptions,
    style: &'a StyleOptions,
}

impl<'a> LegendClassifier<'a> {
    /// Create a classifier over the given option set.
    #[must_use]
    pub fn new(legend: &'a LegendOptions, style: &'a StyleOptions) -> Self {
        Self { legend, style }
    }

    /// Classify `frequencies` into legend items plus the Other pool.
    ///
    /// `extracted_history` lists values the user previously pulled out of
    /// Other; each one still occurring in `frequencies` and not already
    /// present keeps its own entry. The Other bucket is suppressed while
    /// isolation is active. Null is never absorbed into Other.
    #[must_use]
    pub fn classify(
        &self,
        feature: &Feature,
        frequencies: &FrequencyMap,
        isolation_active: bool,
        extracted_history: &[String],
    ) -> Classification {
        let mut pairs: Vec<(Option<&str>, usize)> =
            frequencies.iter().collect();
        pairs.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| rank(feature, a.0).cmp(&rank(feature, b.0)))
        });

        let top_len = self.legend.max_visible_values.min(pairs.len());
        let (top, tail) = pairs.split_at(top_len);

        let mut other_pool: Vec<(String, usize)> = tail
            .iter()
            .filter_map(|&(v, c)| v.map(|v| (v.to_owned(), c)))
            .collect();
        let other_count: usize = other_pool.iter().map(|(_, c)| c).sum();

        let mut items: Vec<LegendItem> = Vec::with_capacity(top_len + 2);
        for &(value, count) in top {
            items.push(self.item(feature, value, count, false));
        }

        if other_count > 0 && self.legend.include_other && !isolation_active
        {
            items.push(LegendItem {
                value: LegendValue::Other,
                color: self.style.other_color.clone(),
                shape: self.style.other_shape,
                count: other_count,
                is_visible: true,
                z_order: items.len(),
                extracted_from_other: false,
            });
        }

        if frequencies.contains(None)
            && !top.iter().any(|(v, _)| v.is_none())
        {
            items.push(self.item(
                feature,
                None,
                frequencies.get(None),
                false,
            ));
        }

        for value in extracted_history {
            let value = value.as_str();
            let already_shown =
                items.iter().any(|it| it.value.as_value() == Some(value));
            if !already_shown && frequencies.contains(Some(value)) {
                items.push(self.item(
                    feature,
                    Some(value),
                    frequencies.get(Some(value)),
                    true,
                ));
            }
        }

        // Values shown individually leave the Other bucket; its count
        // shrinks accordingly and the bucket disappears when drained.
        let shown: FxHashSet<&str> = items
            .iter()
            .filter_map(|it| it.value.as_value())
            .collect();
        other_pool.retain(|(v, _)| !shown.contains(v.as_str()));
        let remaining: usize = other_pool.iter().map(|(_, c)| c).sum();
        if let Some(idx) =
            items.iter().position(|it| it.value == LegendValue::Other)
        {
            if remaining > 0 {
                items[idx].count = remaining;
            } else {
                let _ = items.remove(idx);
            }
        }

        for (z, item) in items.iter_mut().enumerate() {
            item.z_order = z;
        }

        Classification { items, other_pool }
    }

    /// Build one legend item, resolving the declared style or falling back
    /// to the neutral defaults.
    fn item(
        &self,
        feature: &Feature,
        value: Option<&str>,
        count: usize,
        extracted: bool,
    ) -> LegendItem {
        let (color, shape) = feature.style_of(value).map_or_else(
            || (self.style.null_color.as_str(), self.style.null_shape),
            |(c, s)| (c, s),
        );
        LegendItem {
            value: LegendValue::from_value(value),
            color: color.to_owned(),
            shape,
            count,
            is_visible: true,
            z_order: 0,
            extracted_from_other: extracted,
        }
    }
}

/// Deterministic tie-break rank for equal counts: declared values by their
/// declaration index, undeclared values after them by value string.
fn rank<'v>(feature: &Feature, value: Option<&'v str>) -> (usize, &'v str) {
    feature.index_of(value).map_or_else(
        || (usize::MAX, value.unwrap_or("")),
        |idx| (idx, ""),
    )
}
