//! Isolation mode: nested subset constraints over the displayed proteins.
//!
//! Each "split" pushes the current selection as a new constraint layer; the
//! displayed set is the intersection of every layer. A single UI control
//! traditionally serves both intents — deepen when a selection is pending,
//! exit otherwise — so the core exposes the two operations explicitly
//! ([`IsolationStack::push_layer`], [`IsolationStack::exit`]) and keeps
//! [`IsolationStack::toggle`] as a thin router for that single button.

use rustc_hash::FxHashSet;

/// How a [`IsolationStack::toggle`] call changed the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsolationTransition {
    /// Nothing changed (inactive, no pending selection).
    NoOp,
    /// Entered isolation with the first layer.
    Entered,
    /// Pushed a further layer while already active.
    Deepened,
    /// Left isolation; the history was cleared.
    Exited,
}

/// The split-history stack behind isolation mode.
///
/// Invariant: `active` implies a non-empty history; inactive implies an
/// empty one. There is no partial pop — the only transitions are push-deeper
/// and full reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IsolationStack {
    active: bool,
    history: Vec<FxHashSet<String>>,
}

impl IsolationStack {
    /// New, inactive stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether isolation mode is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of constraint layers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// The constraint layers, oldest first.
    #[must_use]
    pub fn history(&self) -> &[FxHashSet<String>] {
        &self.history
    }

    /// Push `selection` as a new constraint layer.
    ///
    /// Entering isolation when inactive, deepening it otherwise. An empty
    /// selection is a no-op (returns `false`); the caller is expected to
    /// clear the pending selection after a successful push.
    pub fn push_layer<I, S>(&mut self, selection: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let layer: FxHashSet<String> =
            selection.into_iter().map(Into::into).collect();
        if layer.is_empty() {
            return false;
        }
        self.history.push(layer);
        self.active = true;
        true
    }

    /// Leave isolation mode entirely, clearing the history.
    ///
    /// The caller clears any hidden-value overrides alongside this.
    pub fn exit(&mut self) {
        self.active = false;
        self.history.clear();
    }

    /// Single-control routing: deepen when `selection` is non-empty, exit
    /// when it is empty while active, no-op when it is empty while
    /// inactive.
    pub fn toggle<S: AsRef<str>>(
        &mut self,
        selection: &[S],
    ) -> IsolationTransition {
        if selection.is_empty() {
            if self.active {
                self.exit();
                IsolationTransition::Exited
            } else {
                IsolationTransition::NoOp
            }
        } else {
            let was_active = self.active;
            let _ = self
                .push_layer(selection.iter().map(|s| s.as_ref().to_owned()));
            if was_active {
                IsolationTransition::Deepened
            } else {
                IsolationTransition::Entered
            }
        }
    }

    /// The currently displayed protein ids.
    ///
    /// Inactive (or empty history): all of `all_ids`. Active: the left-fold
    /// intersection of every layer, restricted to ids present in `all_ids`.
    /// Computed fresh from the history on every call — never cached.
    #[must_use]
    pub fn displayed_set(&self, all_ids: &[String]) -> FxHashSet<String> {
        match self.history.split_first() {
            None => all_ids.iter().cloned().collect(),
            Some((first, rest)) => {
                let mut displayed = first.clone();
                for layer in rest {
                    displayed.retain(|id| layer.contains(id));
                }
                displayed
                    .retain(|id| all_ids.iter().any(|known| known == id));
                displayed
            }
        }
    }

    /// Number of currently displayed proteins.
    #[must_use]
    pub fn displayed_count(&self, all_ids: &[String]) -> usize {
        if self.history.is_empty() {
            all_ids.len()
        } else {
            self.displayed_set(all_ids).len()
        }
    }
}
