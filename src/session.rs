//! The serializable session-state shape.
//!
//! Data only: an external save/load collaborator decides where the JSON
//! goes (file download, share link, browser storage). Capturing and
//! restoring live state is [`Engine`](crate::engine::Engine) behavior —
//! see [`Engine::capture_session`](crate::engine::Engine::capture_session)
//! and [`Engine::restore_session`](crate::engine::Engine::restore_session),
//! which deduplicate the id arrays on the way back in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::{Feature, Projection};
use crate::error::ProtscapeError;

/// One saved session: the dataset plus every piece of controller state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// Ordered protein identifiers.
    pub protein_ids: Vec<String>,
    /// Feature definitions keyed by name.
    pub features: BTreeMap<String, Feature>,
    /// Per-feature value-index columns keyed by name.
    pub feature_data: BTreeMap<String, Vec<Option<i64>>>,
    /// Available 2D embeddings.
    pub projections: Vec<Projection>,
    /// Index of the projection that was displayed.
    pub selected_projection: usize,
    /// Name of the feature that drove the legend.
    pub selected_feature: String,
    /// Selected protein ids (may contain duplicates in hand-edited files;
    /// deduplicated on restore).
    pub selection: Vec<String>,
    /// Highlighted protein ids (deduplicated on restore).
    pub highlight: Vec<String>,
    /// Whether isolation mode was active.
    pub isolation_active: bool,
    /// Isolation layers, oldest first, as id arrays.
    pub isolation_history: Vec<Vec<String>>,
    /// Hidden value keys (null encoded as `"null"`).
    pub hidden_values: Vec<String>,
    /// Whether selection mode was active.
    pub selection_mode: bool,
    /// Protein whose structure the viewer showed, if any.
    pub viewed_structure_id: Option<String>,
}

impl SessionState {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, ProtscapeError> {
        serde_json::to_string(self)
            .map_err(|e| ProtscapeError::SessionParse(e.to_string()))
    }

    /// Parse from a JSON string. Shape validation of the embedded dataset
    /// happens at restore time.
    pub fn from_json(json: &str) -> Result<Self, ProtscapeError> {
        serde_json::from_str(json)
            .map_err(|e| ProtscapeError::SessionParse(e.to_string()))
    }
}
