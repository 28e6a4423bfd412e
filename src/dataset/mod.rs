//! Protein dataset model: ids, categorical features, 2D projections.
//!
//! A [`ProteinDataset`] is supplied whole by a data-loading collaborator
//! (file import, URL fetch, or session restore) and replaced wholesale on
//! every load. Shape violations are a loader-level precondition failure and
//! are rejected here, fail-fast, so the classification pipeline downstream
//! never has to tolerate ragged arrays.

mod shape;

use std::collections::BTreeMap;

use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use shape::PointShape;

use crate::error::ProtscapeError;

/// A categorical protein attribute: an ordered set of possible values, each
/// carrying a display color and marker shape.
///
/// The three sequences are parallel and indexed identically. A `None` entry
/// in `values` declares an explicit null category with its own style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Declared categorical values, in display-priority order.
    pub values: Vec<Option<String>>,
    /// Hex color per declared value.
    pub colors: Vec<String>,
    /// Marker shape per declared value.
    pub shapes: Vec<PointShape>,
}

impl Feature {
    /// Index of `value` in the declared `values` sequence.
    ///
    /// For `None`, finds the first declared null entry.
    #[must_use]
    pub fn index_of(&self, value: Option<&str>) -> Option<usize> {
        self.values.iter().position(|v| v.as_deref() == value)
    }

    /// Resolve the declared color/shape pair for `value`.
    ///
    /// Returns `None` when the value is not declared (or the parallel
    /// arrays are too short); the classifier substitutes neutral defaults.
    #[must_use]
    pub fn style_of(&self, value: Option<&str>) -> Option<(&str, PointShape)> {
        let idx = self.index_of(value)?;
        let color = self.colors.get(idx)?;
        let shape = self.shapes.get(idx)?;
        Some((color.as_str(), *shape))
    }
}

/// A named 2D embedding of the dataset (UMAP, t-SNE, PCA, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Projection name shown in the projection selector.
    pub name: String,
    /// Free-form projection metadata (hyperparameters etc.).
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// One `[x, y]` coordinate per protein, aligned with `protein_ids`.
    pub data: Vec<Vec2>,
}

/// The full visualization dataset.
///
/// `feature_data` columns hold per-protein indices into the corresponding
/// feature's `values` sequence; an absent, negative, or out-of-range index
/// denotes the null value. Every column is aligned positionally with
/// `protein_ids`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProteinDataset {
    /// Ordered, unique protein identifiers.
    pub protein_ids: Vec<String>,
    /// Feature definitions keyed by feature name.
    pub features: BTreeMap<String, Feature>,
    /// Per-feature value-index columns keyed by feature name.
    pub feature_data: BTreeMap<String, Vec<Option<i64>>>,
    /// Available 2D embeddings.
    #[serde(default)]
    pub projections: Vec<Projection>,
}

impl ProteinDataset {
    /// Parse a dataset from JSON and validate its shape.
    pub fn from_json(json: &str) -> Result<Self, ProtscapeError> {
        let dataset: Self = serde_json::from_str(json)
            .map_err(|e| ProtscapeError::DatasetShape(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check every shape invariant, fail-fast with the first violation.
    ///
    /// Validated: unique protein ids; per-feature parallel arrays of equal
    /// length; a data column for every declared feature, aligned with
    /// `protein_ids`; no data column without a declared feature; projection
    /// rows aligned with `protein_ids`.
    pub fn validate(&self) -> Result<(), ProtscapeError> {
        let n = self.protein_ids.len();

        let mut seen = FxHashMap::default();
        for (idx, id) in self.protein_ids.iter().enumerate() {
            if let Some(prev) = seen.insert(id.as_str(), idx) {
                return Err(ProtscapeError::DatasetShape(format!(
                    "duplicate protein id {id:?} at rows {prev} and {idx}"
                )));
            }
        }

        for (name, feature) in &self.features {
            if feature.colors.len() != feature.values.len()
                || feature.shapes.len() != feature.values.len()
            {
                return Err(ProtscapeError::DatasetShape(format!(
                    "feature {name:?}: values/colors/shapes lengths differ \
                     ({}/{}/{})",
                    feature.values.len(),
                    feature.colors.len(),
                    feature.shapes.len()
                )));
            }

            let Some(column) = self.feature_data.get(name) else {
                return Err(ProtscapeError::DatasetShape(format!(
                    "feature {name:?} has no feature_data column"
                )));
            };
            if column.len() != n {
                return Err(ProtscapeError::DatasetShape(format!(
                    "feature {name:?}: {} data rows for {n} proteins",
                    column.len()
                )));
            }
        }

        for name in self.feature_data.keys() {
            if !self.features.contains_key(name) {
                return Err(ProtscapeError::DatasetShape(format!(
                    "feature_data column {name:?} has no feature definition"
                )));
            }
        }

        for projection in &self.projections {
            if projection.data.len() != n {
                return Err(ProtscapeError::DatasetShape(format!(
                    "projection {:?}: {} points for {n} proteins",
                    projection.name,
                    projection.data.len()
                )));
            }
        }

        Ok(())
    }

    /// Number of proteins in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.protein_ids.len()
    }

    /// Whether the dataset holds no proteins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.protein_ids.is_empty()
    }

    /// First feature name in deterministic (lexicographic) order.
    #[must_use]
    pub fn first_feature(&self) -> Option<&str> {
        self.features.keys().next().map(String::as_str)
    }

    /// Row index of a protein id, or `None` if unknown.
    #[must_use]
    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.protein_ids.iter().position(|p| p == id)
    }

    /// Per-protein resolved value sequence for `feature`.
    ///
    /// Maps each protein's value index through the feature's declared
    /// `values`; absent, negative, or out-of-range indices resolve to null.
    /// An unknown feature name resolves every protein to null rather than
    /// erroring, per the silent-totality policy.
    #[must_use]
    pub fn resolved_values(&self, feature: &str) -> Vec<Option<String>> {
        let n = self.protein_ids.len();
        let (Some(def), Some(column)) =
            (self.features.get(feature), self.feature_data.get(feature))
        else {
            return vec![None; n];
        };

        column
            .iter()
            .map(|entry| {
                entry
                    .and_then(|i| usize::try_from(i).ok())
                    .and_then(|i| def.values.get(i))
                    .and_then(Clone::clone)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dataset() -> ProteinDataset {
        let feature = Feature {
            values: vec![
                Some("A".to_owned()),
                Some("B".to_owned()),
                None,
            ],
            colors: vec![
                "#ff0000".to_owned(),
                "#00ff00".to_owned(),
                "#888888".to_owned(),
            ],
            shapes: vec![
                PointShape::Circle,
                PointShape::Square,
                PointShape::Circle,
            ],
        };
        ProteinDataset {
            protein_ids: vec![
                "P1".to_owned(),
                "P2".to_owned(),
                "P3".to_owned(),
            ],
            features: BTreeMap::from([("family".to_owned(), feature)]),
            feature_data: BTreeMap::from([(
                "family".to_owned(),
                vec![Some(0), Some(1), Some(2)],
            )]),
            projections: vec![Projection {
                name: "UMAP".to_owned(),
                metadata: serde_json::Map::new(),
                data: vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(2.0, 0.5),
                ],
            }],
        }
    }

    #[test]
    fn valid_dataset_passes() {
        small_dataset().validate().unwrap();
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut data = small_dataset();
        data.protein_ids[2] = "P1".to_owned();
        assert!(data.validate().is_err());
    }

    #[test]
    fn short_feature_column_rejected() {
        let mut data = small_dataset();
        let _ = data.feature_data.get_mut("family").unwrap().pop();
        assert!(data.validate().is_err());
    }

    #[test]
    fn ragged_feature_arrays_rejected() {
        let mut data = small_dataset();
        let _ = data.features.get_mut("family").unwrap().colors.pop();
        assert!(data.validate().is_err());
    }

    #[test]
    fn missing_feature_column_rejected() {
        let mut data = small_dataset();
        let _ = data.feature_data.remove("family");
        assert!(data.validate().is_err());
    }

    #[test]
    fn orphan_data_column_rejected() {
        let mut data = small_dataset();
        let _ = data
            .feature_data
            .insert("ghost".to_owned(), vec![None, None, None]);
        assert!(data.validate().is_err());
    }

    #[test]
    fn misaligned_projection_rejected() {
        let mut data = small_dataset();
        let _ = data.projections[0].data.pop();
        assert!(data.validate().is_err());
    }

    #[test]
    fn resolves_indices_to_values() {
        let data = small_dataset();
        let resolved = data.resolved_values("family");
        assert_eq!(
            resolved,
            vec![Some("A".to_owned()), Some("B".to_owned()), None]
        );
    }

    #[test]
    fn out_of_range_and_negative_indices_resolve_to_null() {
        let mut data = small_dataset();
        let _ = data.feature_data.insert(
            "family".to_owned(),
            vec![Some(7), Some(-1), None],
        );
        assert_eq!(data.resolved_values("family"), vec![None, None, None]);
    }

    #[test]
    fn unknown_feature_resolves_to_all_null() {
        let data = small_dataset();
        assert_eq!(data.resolved_values("nope"), vec![None, None, None]);
    }

    #[test]
    fn style_lookup_finds_null_entry() {
        let data = small_dataset();
        let feature = &data.features["family"];
        let (color, shape) = feature.style_of(None).unwrap();
        assert_eq!(color, "#888888");
        assert_eq!(shape, PointShape::Circle);
        assert!(feature.style_of(Some("missing")).is_none());
    }

    #[test]
    fn json_round_trip_preserves_projection_coords() {
        let data = small_dataset();
        let json = serde_json::to_string(&data).unwrap();
        let parsed = ProteinDataset::from_json(&json).unwrap();
        assert_eq!(parsed, data);
        assert_eq!(parsed.projections[0].data[1], Vec2::new(1.0, 1.0));
    }
}
