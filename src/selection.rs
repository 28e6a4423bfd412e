//! Selection, highlight, and viewed-structure state.
//!
//! Tracks which proteins the user has selected (click targets, isolation
//! layer candidates), which are visually highlighted, and which structure
//! the 3D-viewer collaborator should show. Both id sequences stay ordered
//! and duplicate-free.

/// Modifier key state accompanying a protein click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Command / meta key held.
    pub meta: bool,
    /// Shift key held.
    pub shift: bool,
}

impl ClickModifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
    };

    /// Whether any modifier key is active.
    #[must_use]
    pub fn any(self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}

/// Outcome of a [`SelectionController::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No id matched; state unchanged.
    NoMatch,
    /// Exactly one id matched and was selected and highlighted.
    Selected(String),
    /// Multiple ids matched and were added to the highlight set only;
    /// carries the match count.
    Highlighted(usize),
}

/// The selection/highlight state machine.
///
/// `selection_mode` gates the click side effects: while it is active,
/// clicking accumulates selections without touching the highlight set or
/// the viewed structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    selection: Vec<String>,
    highlight: Vec<String>,
    viewed_structure: Option<String>,
    selection_mode: bool,
}

impl SelectionController {
    /// Empty state, selection mode off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected protein ids, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Currently highlighted protein ids, in highlight order.
    #[must_use]
    pub fn highlight(&self) -> &[String] {
        &self.highlight
    }

    /// Protein whose 3D structure the viewer collaborator should show.
    #[must_use]
    pub fn viewed_structure(&self) -> Option<&str> {
        self.viewed_structure.as_deref()
    }

    /// Whether selection mode is active.
    #[must_use]
    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    /// Enable or disable selection mode.
    pub fn set_selection_mode(&mut self, enabled: bool) {
        self.selection_mode = enabled;
    }

    /// Process a click on the protein `id`.
    ///
    /// A click on an already-selected protein deselects it (and drops its
    /// highlight and viewed structure). An unmodified click replaces the
    /// selection; a modified click appends. Highlight and viewed structure
    /// only follow along while selection mode is off.
    pub fn click(&mut self, id: &str, modifiers: ClickModifiers) {
        if self.selection.iter().any(|s| s == id) {
            self.remove(id);
            return;
        }

        if modifiers.any() {
            self.selection.push(id.to_owned());
            if !self.selection_mode {
                push_unique(&mut self.highlight, id);
                self.viewed_structure = Some(id.to_owned());
            }
        } else {
            self.selection.clear();
            self.selection.push(id.to_owned());
            if !self.selection_mode {
                self.highlight.clear();
                self.highlight.push(id.to_owned());
                self.viewed_structure = Some(id.to_owned());
            }
        }
    }

    /// Search `ids` for `query`: exact case-insensitive match first, then
    /// substring. Zero matches change nothing; a unique match is selected,
    /// highlighted, and viewed; multiple matches are highlighted only.
    pub fn search(&mut self, query: &str, ids: &[String]) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::NoMatch;
        }
        let needle = query.to_lowercase();

        let mut matches: Vec<&String> = ids
            .iter()
            .filter(|id| id.to_lowercase() == needle)
            .collect();
        if matches.is_empty() {
            matches = ids
                .iter()
                .filter(|id| id.to_lowercase().contains(&needle))
                .collect();
        }

        match matches.as_slice() {
            [] => SearchOutcome::NoMatch,
            [only] => {
                let id = (*only).clone();
                push_unique(&mut self.selection, &id);
                push_unique(&mut self.highlight, &id);
                self.viewed_structure = Some(id.clone());
                SearchOutcome::Selected(id)
            }
            many => {
                for id in many {
                    push_unique(&mut self.highlight, id);
                }
                SearchOutcome::Highlighted(many.len())
            }
        }
    }

    /// Remove `id` from both the selection and the highlight set.
    ///
    /// Clears the viewed structure when it pointed at `id`. Idempotent.
    pub fn remove(&mut self, id: &str) {
        self.selection.retain(|s| s != id);
        self.highlight.retain(|s| s != id);
        if self.viewed_structure.as_deref() == Some(id) {
            self.viewed_structure = None;
        }
    }

    /// Clear selection and highlight, keeping the viewed structure.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.highlight.clear();
    }

    /// Clear only the selection (after it was consumed as an isolation
    /// layer).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Set or clear the viewed structure directly.
    pub fn set_viewed_structure(&mut self, id: Option<String>) {
        self.viewed_structure = id;
    }

    /// Replace the whole state (session restore). Both id sequences are
    /// deduplicated, first occurrence wins.
    pub fn restore(
        &mut self,
        selection: Vec<String>,
        highlight: Vec<String>,
        viewed_structure: Option<String>,
        selection_mode: bool,
    ) {
        self.selection = dedup_preserving_order(selection);
        self.highlight = dedup_preserving_order(highlight);
        self.viewed_structure = viewed_structure;
        self.selection_mode = selection_mode;
    }
}

/// Append `id` unless already present.
fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|s| s == id) {
        ids.push(id.to_owned());
    }
}

/// Drop duplicate ids, keeping the first occurrence of each.
#[must_use]
pub fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn plain_click_replaces_selection_and_views_structure() {
        let mut ctl = SelectionController::new();
        ctl.click("P1", ClickModifiers::NONE);
        ctl.click("P2", ClickModifiers::NONE);
        assert_eq!(ctl.selection(), ["P2"]);
        assert_eq!(ctl.highlight(), ["P2"]);
        assert_eq!(ctl.viewed_structure(), Some("P2"));
    }

    #[test]
    fn modified_click_appends() {
        let mut ctl = SelectionController::new();
        ctl.click("P1", ClickModifiers::NONE);
        ctl.click(
            "P2",
            ClickModifiers {
                shift: true,
                ..ClickModifiers::NONE
            },
        );
        assert_eq!(ctl.selection(), ["P1", "P2"]);
        assert_eq!(ctl.highlight(), ["P1", "P2"]);
        assert_eq!(ctl.viewed_structure(), Some("P2"));
    }

    #[test]
    fn click_on_selected_protein_deselects_it() {
        let mut ctl = SelectionController::new();
        ctl.click("P1", ClickModifiers::NONE);
        ctl.click("P1", ClickModifiers::NONE);
        assert!(ctl.selection().is_empty());
        assert!(ctl.highlight().is_empty());
        assert_eq!(ctl.viewed_structure(), None);
    }

    #[test]
    fn selection_mode_suppresses_highlight_and_viewer() {
        let mut ctl = SelectionController::new();
        ctl.set_selection_mode(true);
        ctl.click("P1", ClickModifiers::NONE);
        assert_eq!(ctl.selection(), ["P1"]);
        assert!(ctl.highlight().is_empty());
        assert_eq!(ctl.viewed_structure(), None);

        ctl.click(
            "P2",
            ClickModifiers {
                ctrl: true,
                ..ClickModifiers::NONE
            },
        );
        assert_eq!(ctl.selection(), ["P1", "P2"]);
        assert!(ctl.highlight().is_empty());
    }

    #[test]
    fn search_unique_exact_match_selects() {
        let mut ctl = SelectionController::new();
        let all = ids(&["P12345", "Q67890", "P99999"]);
        let outcome = ctl.search("q67890", &all);
        assert_eq!(outcome, SearchOutcome::Selected("Q67890".to_owned()));
        assert_eq!(ctl.selection(), ["Q67890"]);
        assert_eq!(ctl.highlight(), ["Q67890"]);
        assert_eq!(ctl.viewed_structure(), Some("Q67890"));
    }

    #[test]
    fn search_prefers_exact_over_substring() {
        let mut ctl = SelectionController::new();
        let all = ids(&["P1", "P12", "P123"]);
        let outcome = ctl.search("P1", &all);
        assert_eq!(outcome, SearchOutcome::Selected("P1".to_owned()));
    }

    #[test]
    fn search_multiple_matches_highlight_only() {
        let mut ctl = SelectionController::new();
        let all = ids(&["P12345", "P12399", "Q00001"]);
        let outcome = ctl.search("p123", &all);
        assert_eq!(outcome, SearchOutcome::Highlighted(2));
        assert!(ctl.selection().is_empty());
        assert_eq!(ctl.highlight(), ["P12345", "P12399"]);
        assert_eq!(ctl.viewed_structure(), None);
    }

    #[test]
    fn search_no_match_changes_nothing() {
        let mut ctl = SelectionController::new();
        ctl.click("P1", ClickModifiers::NONE);
        let before = ctl.clone();
        let all = ids(&["P1", "P2"]);
        assert_eq!(ctl.search("zzz", &all), SearchOutcome::NoMatch);
        assert_eq!(ctl.search("   ", &all), SearchOutcome::NoMatch);
        assert_eq!(ctl, before);
    }

    #[test]
    fn search_does_not_duplicate_existing_entries() {
        let mut ctl = SelectionController::new();
        ctl.click("P1", ClickModifiers::NONE);
        let all = ids(&["P1"]);
        let _ = ctl.search("P1", &all);
        assert_eq!(ctl.selection(), ["P1"]);
        assert_eq!(ctl.highlight(), ["P1"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut ctl = SelectionController::new();
        ctl.click("P1", ClickModifiers::NONE);
        ctl.remove("P1");
        ctl.remove("P1");
        assert!(ctl.selection().is_empty());
        assert!(ctl.highlight().is_empty());
        assert_eq!(ctl.viewed_structure(), None);
    }

    #[test]
    fn restore_deduplicates() {
        let mut ctl = SelectionController::new();
        ctl.restore(
            ids(&["P1", "P2", "P1"]),
            ids(&["P2", "P2", "P3"]),
            Some("P1".to_owned()),
            true,
        );
        assert_eq!(ctl.selection(), ["P1", "P2"]);
        assert_eq!(ctl.highlight(), ["P2", "P3"]);
        assert_eq!(ctl.viewed_structure(), Some("P1"));
        assert!(ctl.selection_mode());
    }
}
