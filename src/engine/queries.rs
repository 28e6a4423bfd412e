//! Read-only queries on the engine state.

use rustc_hash::FxHashSet;

use super::Engine;
use crate::dataset::{ProteinDataset, Projection};
use crate::legend::z_order::{self, ZOrderMap};
use crate::legend::LegendItem;
use crate::options::Options;

impl Engine {
    /// The current dataset.
    #[must_use]
    pub fn dataset(&self) -> &ProteinDataset {
        &self.dataset
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the feature driving legend and coloring.
    #[must_use]
    pub fn selected_feature(&self) -> &str {
        &self.selected_feature
    }

    /// Index of the displayed projection.
    #[must_use]
    pub fn selected_projection(&self) -> usize {
        self.selected_projection
    }

    /// The displayed projection, if the dataset has any.
    #[must_use]
    pub fn projection(&self) -> Option<&Projection> {
        self.dataset.projections.get(self.selected_projection)
    }

    /// Classified legend items in draw order.
    #[must_use]
    pub fn legend_items(&self) -> &[LegendItem] {
        &self.classification.items
    }

    /// `(value, count)` pairs aggregated inside the Other bucket.
    #[must_use]
    pub fn other_pool(&self) -> &[(String, usize)] {
        &self.classification.other_pool
    }

    /// Current `key → z_order` assignment for the rendering collaborator.
    #[must_use]
    pub fn z_order_map(&self) -> ZOrderMap {
        z_order::z_order_map(&self.classification.items)
    }

    /// Per-protein resolved values of the selected feature.
    #[must_use]
    pub fn feature_values(&self) -> Vec<Option<String>> {
        self.dataset.resolved_values(&self.selected_feature)
    }

    /// Whether isolation mode is active.
    #[must_use]
    pub fn is_isolation_active(&self) -> bool {
        self.isolation.is_active()
    }

    /// Number of isolation layers.
    #[must_use]
    pub fn isolation_depth(&self) -> usize {
        self.isolation.depth()
    }

    /// The currently displayed protein ids.
    #[must_use]
    pub fn displayed_ids(&self) -> FxHashSet<String> {
        self.isolation.displayed_set(&self.dataset.protein_ids)
    }

    /// Number of currently displayed proteins.
    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.isolation.displayed_count(&self.dataset.protein_ids)
    }

    /// Total proteins in the dataset.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.dataset.len()
    }

    /// Whether a value key is currently toggled off.
    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.is_hidden(key)
    }

    /// Selected protein ids, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[String] {
        self.selection.selection()
    }

    /// Highlighted protein ids, in highlight order.
    #[must_use]
    pub fn highlight(&self) -> &[String] {
        self.selection.highlight()
    }

    /// Protein whose structure the viewer collaborator should show.
    #[must_use]
    pub fn viewed_structure(&self) -> Option<&str> {
        self.selection.viewed_structure()
    }

    /// Whether selection mode is active.
    #[must_use]
    pub fn selection_mode(&self) -> bool {
        self.selection.selection_mode()
    }

    /// Values the user pulled out of the Other bucket, oldest first.
    #[must_use]
    pub fn extracted_history(&self) -> &[String] {
        &self.extracted
    }
}
