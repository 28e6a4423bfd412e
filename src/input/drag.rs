//! Trailing-debounce coalescing for legend drag-reorder events.

use web_time::{Duration, Instant};

use crate::legend::LegendValue;

/// A reorder ready to be committed: move `dragged` to `target`'s position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderRequest {
    /// The legend entry being dragged.
    pub dragged: LegendValue,
    /// The entry whose position the dragged one takes.
    pub target: LegendValue,
}

/// One pending commit with its maturity deadline.
#[derive(Debug, Clone)]
struct Pending {
    target: LegendValue,
    deadline: Instant,
}

/// Coalesces rapid drag-over events into a single committed reorder.
///
/// Each pointer-over event during a drag schedules — or reschedules,
/// canceling any prior pending one — a short-delay commit of the pending
/// reorder. [`DragCoalescer::poll`] surfaces a commit once its deadline
/// matures; [`DragCoalescer::complete`] flushes the final pending commit at
/// drop time; [`DragCoalescer::cancel`] discards it when the drag ends
/// without a drop. Only the most recent pointer position can ever commit.
///
/// Time is injected by the caller (the coalescer never samples a clock),
/// so behavior is deterministic under test.
#[derive(Debug, Clone)]
pub struct DragCoalescer {
    delay: Duration,
    dragging: Option<LegendValue>,
    pending: Option<Pending>,
}

impl DragCoalescer {
    /// Coalescer with the given debounce delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            dragging: None,
            pending: None,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Whether a commit is scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin dragging `value`, discarding any leftover pending commit.
    pub fn begin(&mut self, value: LegendValue) {
        self.dragging = Some(value);
        self.pending = None;
    }

    /// Pointer moved over `target` at `now`: reschedule the pending
    /// commit. Ignored when no drag is active or the target is the dragged
    /// entry itself.
    pub fn drag_over(&mut self, target: LegendValue, now: Instant) {
        let Some(dragged) = &self.dragging else {
            return;
        };
        if *dragged == target {
            return;
        }
        self.pending = Some(Pending {
            target,
            deadline: now + self.delay,
        });
    }

    /// Surface the pending commit once its deadline has matured.
    ///
    /// Returns at most one request per schedule cycle; the drag itself
    /// stays active.
    pub fn poll(&mut self, now: Instant) -> Option<ReorderRequest> {
        let matured = self
            .pending
            .as_ref()
            .is_some_and(|p| now >= p.deadline);
        if !matured {
            return None;
        }
        let pending = self.pending.take()?;
        let dragged = self.dragging.clone()?;
        Some(ReorderRequest {
            dragged,
            target: pending.target,
        })
    }

    /// Drop: flush the final pending commit (if any) and end the drag.
    pub fn complete(&mut self) -> Option<ReorderRequest> {
        let pending = self.pending.take();
        let dragged = self.dragging.take();
        match (dragged, pending) {
            (Some(dragged), Some(pending)) => Some(ReorderRequest {
                dragged,
                target: pending.target,
            }),
            _ => None,
        }
    }

    /// Drag ended without a drop — discard the pending commit.
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(name: &str) -> LegendValue {
        LegendValue::Value(name.to_owned())
    }

    fn coalescer() -> (DragCoalescer, Instant) {
        (DragCoalescer::new(Duration::from_millis(100)), Instant::now())
    }

    #[test]
    fn rapid_drag_overs_commit_only_the_final_target() {
        let (mut drag, t0) = coalescer();
        drag.begin(value("A"));
        drag.drag_over(value("B"), t0);
        drag.drag_over(value("C"), t0 + Duration::from_millis(30));
        drag.drag_over(value("D"), t0 + Duration::from_millis(60));

        // 100ms after the *first* event: the first two schedules were
        // canceled, the last one has not matured yet.
        assert!(drag.poll(t0 + Duration::from_millis(100)).is_none());

        let commit = drag.poll(t0 + Duration::from_millis(160)).unwrap();
        assert_eq!(commit.dragged, value("A"));
        assert_eq!(commit.target, value("D"));

        // One commit per schedule cycle.
        assert!(drag.poll(t0 + Duration::from_millis(500)).is_none());
        assert!(drag.is_dragging());
    }

    #[test]
    fn drop_flushes_the_pending_commit_immediately() {
        let (mut drag, t0) = coalescer();
        drag.begin(value("A"));
        drag.drag_over(value("B"), t0);
        let commit = drag.complete().unwrap();
        assert_eq!(commit.target, value("B"));
        assert!(!drag.is_dragging());
        assert!(!drag.has_pending());
    }

    #[test]
    fn ending_without_drop_discards_the_pending_commit() {
        let (mut drag, t0) = coalescer();
        drag.begin(value("A"));
        drag.drag_over(value("B"), t0);
        drag.cancel();
        assert!(drag.poll(t0 + Duration::from_millis(500)).is_none());
        assert!(!drag.has_pending());
    }

    #[test]
    fn drop_without_pending_is_a_no_op() {
        let (mut drag, _) = coalescer();
        drag.begin(value("A"));
        assert!(drag.complete().is_none());
    }

    #[test]
    fn hovering_the_dragged_entry_schedules_nothing() {
        let (mut drag, t0) = coalescer();
        drag.begin(value("A"));
        drag.drag_over(value("A"), t0);
        assert!(!drag.has_pending());
    }

    #[test]
    fn events_without_an_active_drag_are_ignored() {
        let (mut drag, t0) = coalescer();
        drag.drag_over(value("B"), t0);
        assert!(!drag.has_pending());
        assert!(drag.complete().is_none());
    }

    #[test]
    fn new_drag_discards_stale_pending() {
        let (mut drag, t0) = coalescer();
        drag.begin(value("A"));
        drag.drag_over(value("B"), t0);
        drag.begin(value("C"));
        assert!(!drag.has_pending());
        assert!(drag.poll(t0 + Duration::from_millis(500)).is_none());
    }
}
