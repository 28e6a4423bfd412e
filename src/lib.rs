// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Classification and filtering core for 2D protein embedding scatterplots.
//!
//! Protscape decides, for any categorical feature and any currently-displayed
//! subset of proteins, which values appear in the legend, how they are
//! bucketed and ordered, and which proteins remain in view after nested
//! isolation splits. It is pure state-transition logic: rendering, zoom/pan,
//! export, and structure viewing are external collaborators that consume its
//! query results.
//!
//! # Key entry points
//!
//! - [`engine::Engine`] - the composition root; executes [`engine::Command`]
//!   values and re-runs the recompute pipeline after every mutation
//! - [`dataset::ProteinDataset`] - validated protein/feature/projection data
//! - [`legend`] - frequency counting, top-N/Other/null classification,
//!   z-order management, hidden-value tracking
//! - [`isolation::IsolationStack`] - the split-history stack behind
//!   isolation mode
//! - [`selection::SelectionController`] - selection/highlight/search state
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Architecture
//!
//! Every mutation flows through [`engine::Engine::execute`] as a
//! [`engine::Command`], then triggers a full, deterministic recompute:
//! displayed subset → frequency map → classified legend items. There is no
//! background processing; the pipeline is idempotent and safe to re-run on
//! every input change. The one temporal element — coalescing rapid legend
//! drag-reorder events — lives in [`input::DragCoalescer`] and is driven by
//! an explicit clock so it stays deterministic under test.

pub mod dataset;
pub mod engine;
pub mod error;
pub mod input;
pub mod isolation;
pub mod legend;
pub mod options;
pub mod selection;
pub mod session;
