//! Interaction plumbing between raw UI events and engine commands.
//!
//! The only stateful piece is [`DragCoalescer`]: legend drag-reorder events
//! arrive as rapid pointer-over bursts and must be coalesced so that a
//! single reorder — reflecting the final pointer position — is committed
//! per drag.

mod drag;

pub use drag::{DragCoalescer, ReorderRequest};
