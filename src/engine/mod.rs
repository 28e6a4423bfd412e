//! The composition root: owns the dataset and every controller, executes
//! commands, and re-runs the recompute pipeline.
//!
//! The pipeline — displayed subset → frequency map → classified legend
//! items — is recomputed in full whenever one of its inputs changes:
//! the dataset, the selected feature, the isolation stack, the extraction
//! history, or the options. Hidden-value toggles and manual legend reorders
//! are overlays on the classified item list (visibility flags and z-order
//! respectively); they survive until the next pipeline rebuild discards
//! them.

mod command;
mod queries;

pub use command::Command;

use crate::dataset::ProteinDataset;
use crate::error::ProtscapeError;
use crate::input::DragCoalescer;
use crate::isolation::{IsolationStack, IsolationTransition};
use crate::legend::classify::Classification;
use crate::legend::frequency::DisplayedRows;
use crate::legend::{
    count_frequencies, z_order, HiddenValueSet, LegendClassifier,
    LegendValue,
};
use crate::options::Options;
use crate::selection::SelectionController;
use crate::session::SessionState;

/// The protscape state engine.
///
/// All mutation goes through [`Engine::execute`]; collaborators read state
/// back through the query methods (legend items, displayed set, selection,
/// hidden predicate). The engine is single-owner, synchronous state — no
/// locks, no background work.
#[derive(Debug, Default)]
pub struct Engine {
    dataset: ProteinDataset,
    options: Options,
    selected_feature: String,
    selected_projection: usize,
    selection: SelectionController,
    isolation: IsolationStack,
    hidden: HiddenValueSet,
    extracted: Vec<String>,
    classification: Classification,
}

impl Engine {
    /// Engine with default options and an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the given options and an empty dataset.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the dataset wholesale.
    ///
    /// Validates the dataset shape first, then resets isolation, selection,
    /// hidden values, and the extraction history, selects the first feature,
    /// and recomputes.
    pub fn load_dataset(
        &mut self,
        dataset: ProteinDataset,
    ) -> Result<(), ProtscapeError> {
        dataset.validate()?;
        log::info!(
            "loaded dataset: {} proteins, {} features, {} projections",
            dataset.len(),
            dataset.features.len(),
            dataset.projections.len()
        );
        self.dataset = dataset;
        self.selected_projection = 0;
        self.selected_feature = self
            .dataset
            .first_feature()
            .unwrap_or_default()
            .to_owned();
        self.selection = SelectionController::new();
        self.isolation = IsolationStack::new();
        self.hidden = HiddenValueSet::new();
        self.extracted.clear();
        self.recompute();
        Ok(())
    }

    /// Execute one command and expose the resulting state.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SelectFeature { name } => self.select_feature(&name),
            Command::SelectProjection { index } => {
                self.select_projection(index);
            }
            Command::ClickProtein { id, modifiers } => {
                self.selection.click(&id, modifiers);
            }
            Command::Search { query } => {
                let outcome = self
                    .selection
                    .search(&query, &self.dataset.protein_ids);
                log::debug!("search {query:?}: {outcome:?}");
            }
            Command::RemoveProtein { id } => self.selection.remove(&id),
            Command::ClearSelections => self.selection.clear(),
            Command::SetSelectionMode { enabled } => {
                self.selection.set_selection_mode(enabled);
            }
            Command::SetViewedStructure { id } => {
                self.selection.set_viewed_structure(id);
            }
            Command::ToggleIsolation => self.toggle_isolation(),
            Command::PushIsolationLayer => self.push_isolation_layer(),
            Command::ExitIsolation => self.exit_isolation(),
            Command::ToggleValueVisibility { key } => {
                let _ = self.hidden.toggle(&key);
                self.after_visibility_change();
            }
            Command::ShowOnlyValue { key } => self.show_only(&key),
            Command::ShowAllValues => {
                self.hidden.clear();
                self.apply_visibility_overlay();
            }
            Command::ExtractFromOther { value } => {
                self.extract_from_other(value);
            }
            Command::ReorderLegend { dragged, target } => {
                self.reorder_legend(&dragged, &target);
            }
        }
    }

    /// Replace the options and recompute.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.recompute();
    }

    /// A drag coalescer configured with this engine's debounce delay.
    #[must_use]
    pub fn new_drag_coalescer(&self) -> DragCoalescer {
        DragCoalescer::new(self.options.interaction.drag_debounce())
    }

    // ── Session persistence ─────────────────────────────────────────

    /// Snapshot the full session state for the save/load collaborator.
    #[must_use]
    pub fn capture_session(&self) -> SessionState {
        SessionState {
            protein_ids: self.dataset.protein_ids.clone(),
            features: self.dataset.features.clone(),
            feature_data: self.dataset.feature_data.clone(),
            projections: self.dataset.projections.clone(),
            selected_projection: self.selected_projection,
            selected_feature: self.selected_feature.clone(),
            selection: self.selection.selection().to_vec(),
            highlight: self.selection.highlight().to_vec(),
            isolation_active: self.isolation.is_active(),
            isolation_history: self
                .isolation
                .history()
                .iter()
                .map(|layer| {
                    let mut ids: Vec<String> =
                        layer.iter().cloned().collect();
                    ids.sort_unstable();
                    ids
                })
                .collect(),
            hidden_values: self.hidden.sorted_keys(),
            selection_mode: self.selection.selection_mode(),
            viewed_structure_id: self
                .selection
                .viewed_structure()
                .map(ToOwned::to_owned),
        }
    }

    /// Restore a previously captured session.
    ///
    /// The embedded dataset is validated; id arrays are deduplicated via
    /// set conversion before becoming controller state. The extraction
    /// history resets — it never survives a dataset replacement.
    pub fn restore_session(
        &mut self,
        session: SessionState,
    ) -> Result<(), ProtscapeError> {
        let dataset = ProteinDataset {
            protein_ids: session.protein_ids,
            features: session.features,
            feature_data: session.feature_data,
            projections: session.projections,
        };
        dataset.validate()?;
        self.dataset = dataset;

        self.selected_projection = if session.selected_projection
            < self.dataset.projections.len()
        {
            session.selected_projection
        } else {
            0
        };
        self.selected_feature = if self
            .dataset
            .features
            .contains_key(&session.selected_feature)
        {
            session.selected_feature
        } else {
            self.dataset.first_feature().unwrap_or_default().to_owned()
        };

        self.selection.restore(
            session.selection,
            session.highlight,
            session.viewed_structure_id,
            session.selection_mode,
        );

        self.isolation = IsolationStack::new();
        if session.isolation_active {
            for layer in session.isolation_history {
                let _ = self.isolation.push_layer(layer);
            }
        }

        self.hidden.replace(session.hidden_values);
        self.extracted.clear();
        self.recompute();
        log::info!(
            "restored session: {} proteins, isolation depth {}",
            self.dataset.len(),
            self.isolation.depth()
        );
        Ok(())
    }

    // ── Command handlers ────────────────────────────────────────────

    fn select_feature(&mut self, name: &str) {
        if !self.dataset.features.contains_key(name) {
            log::warn!("ignoring unknown feature {name:?}");
            return;
        }
        if self.selected_feature != name {
            self.selected_feature = name.to_owned();
            self.after_visibility_change();
            self.recompute();
        }
    }

    fn select_projection(&mut self, index: usize) {
        if index < self.dataset.projections.len() {
            self.selected_projection = index;
        } else {
            log::warn!("ignoring out-of-range projection index {index}");
        }
    }

    /// Single-control isolation routing: deepen with the pending selection,
    /// exit when none is pending.
    fn toggle_isolation(&mut self) {
        let pending = self.selection.selection().to_vec();
        match self.isolation.toggle(&pending) {
            IsolationTransition::Entered
            | IsolationTransition::Deepened => {
                self.selection.clear_selection();
                self.recompute();
            }
            IsolationTransition::Exited => {
                self.hidden.clear();
                self.recompute();
            }
            IsolationTransition::NoOp => {}
        }
    }

    fn push_isolation_layer(&mut self) {
        let pending = self.selection.selection().to_vec();
        if self.isolation.push_layer(pending) {
            self.selection.clear_selection();
            self.recompute();
        }
    }

    fn exit_isolation(&mut self) {
        if self.isolation.is_active() {
            self.isolation.exit();
            self.hidden.clear();
            self.recompute();
        }
    }

    /// Double-click semantics: show only `key`, or restore everything when
    /// `key` is already the only visible entry.
    fn show_only(&mut self, key: &str) {
        let keys: Vec<String> = self
            .classification
            .items
            .iter()
            .map(|it| it.value.key().to_owned())
            .collect();
        if !keys.iter().any(|k| k == key) {
            return;
        }
        let visible: Vec<&String> = keys
            .iter()
            .filter(|k| !self.hidden.is_hidden(k))
            .collect();
        if visible.len() == 1 && visible[0] == key {
            self.hidden.clear();
        } else {
            self.hidden.show_only(key, &keys);
        }
        self.after_visibility_change();
    }

    fn extract_from_other(&mut self, value: String) {
        let in_pool = self
            .classification
            .other_pool
            .iter()
            .any(|(v, _)| *v == value);
        if !in_pool || self.extracted.contains(&value) {
            log::debug!("ignoring extraction of {value:?}: not in pool");
            return;
        }
        self.extracted.push(value);
        self.recompute();
    }

    fn reorder_legend(
        &mut self,
        dragged: &LegendValue,
        target: &LegendValue,
    ) {
        if let Some(map) = z_order::reorder(
            &mut self.classification.items,
            dragged,
            target,
        ) {
            log::debug!("legend reorder committed: {} entries", map.len());
        }
    }

    // ── Recompute pipeline ──────────────────────────────────────────

    /// Full, deterministic rebuild: displayed subset → frequency map →
    /// classified legend items, with the hidden-value overlay reapplied.
    fn recompute(&mut self) {
        let Some(feature) =
            self.dataset.features.get(&self.selected_feature)
        else {
            self.classification = Classification::default();
            return;
        };

        let values = self.dataset.resolved_values(&self.selected_feature);
        let rows = displayed_rows(&self.isolation, &self.dataset);
        let frequencies = count_frequencies(&values, &rows);
        let classifier = LegendClassifier::new(
            &self.options.legend,
            &self.options.style,
        );
        self.classification = classifier.classify(
            feature,
            &frequencies,
            self.isolation.is_active(),
            &self.extracted,
        );
        self.apply_visibility_overlay();
        log::debug!(
            "recomputed legend for {:?}: {} items, {} in Other pool",
            self.selected_feature,
            self.classification.items.len(),
            self.classification.other_pool.len()
        );
    }

    /// Re-apply hidden-value flags to the classified items.
    fn apply_visibility_overlay(&mut self) {
        for item in &mut self.classification.items {
            item.is_visible = !self.hidden.is_value_hidden(&item.value);
        }
    }

    /// Auto-reset check and overlay refresh after any hidden-set mutation.
    fn after_visibility_change(&mut self) {
        if let Some(feature) =
            self.dataset.features.get(&self.selected_feature)
        {
            if self.hidden.auto_reset_if_all_hidden(feature) {
                log::debug!("all values hidden, resetting visibility");
            }
        }
        self.apply_visibility_overlay();
    }
}

/// Row-index view of the currently displayed subset.
fn displayed_rows(
    isolation: &IsolationStack,
    dataset: &ProteinDataset,
) -> DisplayedRows {
    if !isolation.is_active() {
        return DisplayedRows::All;
    }
    let displayed = isolation.displayed_set(&dataset.protein_ids);
    DisplayedRows::Subset(
        dataset
            .protein_ids
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                displayed.contains(id).then_some(index)
            })
            .collect(),
    )
}
