//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a click, a search
//! box, a legend drag, or programmatic call — is represented as a
//! `Command`.  Consumers construct commands and pass them to
//! [`Engine::execute`](super::Engine::execute).

use crate::legend::LegendValue;
use crate::selection::ClickModifiers;

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively.  The engine never cares *how* a command was triggered —
/// scatterplot, legend, control bar, or API all look identical:
///
/// ```ignore
/// engine.execute(Command::ToggleIsolation);
/// engine.execute(Command::Search { query: "P12345".into() });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ── View ────────────────────────────────────────────────────────
    /// Switch the feature the legend and coloring are driven by.
    SelectFeature {
        /// Feature name; unknown names are ignored.
        name: String,
    },

    /// Switch the displayed 2D projection.
    SelectProjection {
        /// Index into the dataset's projections; out-of-range is ignored.
        index: usize,
    },

    // ── Selection ───────────────────────────────────────────────────
    /// A click on a protein point.
    ClickProtein {
        /// The clicked protein id.
        id: String,
        /// Modifier keys held during the click.
        modifiers: ClickModifiers,
    },

    /// Search protein ids (exact match first, then substring).
    Search {
        /// The search query; surrounding whitespace is ignored.
        query: String,
    },

    /// Remove one protein from selection and highlight.
    RemoveProtein {
        /// The protein id to remove; absent ids are ignored.
        id: String,
    },

    /// Clear selection and highlight.
    ClearSelections,

    /// Enable or disable selection mode (accumulate selections without
    /// touching highlight or the viewed structure).
    SetSelectionMode {
        /// The new mode.
        enabled: bool,
    },

    /// Set or clear the structure shown by the viewer collaborator.
    SetViewedStructure {
        /// Protein id, or `None` to close the viewer.
        id: Option<String>,
    },

    // ── Isolation ───────────────────────────────────────────────────
    /// Single-control isolation routing: deepen with the pending
    /// selection, or exit when none is pending.
    ToggleIsolation,

    /// Push the pending selection as a new isolation layer.
    PushIsolationLayer,

    /// Leave isolation mode, clearing the split history and any
    /// hidden-value overrides.
    ExitIsolation,

    // ── Legend ──────────────────────────────────────────────────────
    /// Toggle one value's visibility on the plot.
    ToggleValueVisibility {
        /// Hidden-value key (null as `"null"`, Other as `"Other"`).
        key: String,
    },

    /// Double-click semantics: show only this value — or, when it is
    /// already the only visible one, show everything again.
    ShowOnlyValue {
        /// Hidden-value key of the double-clicked entry.
        key: String,
    },

    /// Make every value visible.
    ShowAllValues,

    /// Pull a value out of the aggregated Other bucket into its own
    /// legend entry.
    ExtractFromOther {
        /// The value to extract; ignored unless currently in the pool.
        value: String,
    },

    /// Committed legend drag-reorder (already coalesced by
    /// [`DragCoalescer`](crate::input::DragCoalescer)).
    ReorderLegend {
        /// The entry that was dragged.
        dragged: LegendValue,
        /// The entry whose position it takes.
        target: LegendValue,
    },
}
