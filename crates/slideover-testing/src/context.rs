//! Recording transition context for driver and animator tests.

use std::cell::{Cell, RefCell};

use slideover_core::{Rect, TransitionContext, ViewRole};

/// One observed context call, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContextOp {
    SetFrame(ViewRole, Rect),
    Mount(ViewRole),
    UpdatePercent(f32),
    Finish,
    Cancel,
    Complete(bool),
}

/// [`TransitionContext`] that records every sink call.
///
/// `finish`/`cancel` flip the cancelled flag the way a host's
/// percent-driven infrastructure would, so completion reporting can be
/// asserted end to end.
pub struct RecordingContext {
    container: Rect,
    initial_frames: [Rect; 2],
    final_frames: [Rect; 2],
    cancelled: Cell<bool>,
    ops: RefCell<Vec<ContextOp>>,
}

impl RecordingContext {
    /// Context whose views all default to the container's bounds.
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            initial_frames: [container; 2],
            final_frames: [container; 2],
            cancelled: Cell::new(false),
            ops: RefCell::new(Vec::new()),
        }
    }

    pub fn with_initial_frame(mut self, role: ViewRole, frame: Rect) -> Self {
        self.initial_frames[Self::index(role)] = frame;
        self
    }

    pub fn with_final_frame(mut self, role: ViewRole, frame: Rect) -> Self {
        self.final_frames[Self::index(role)] = frame;
        self
    }

    /// Snapshot of every recorded call so far.
    pub fn ops(&self) -> Vec<ContextOp> {
        self.ops.borrow().clone()
    }

    fn index(role: ViewRole) -> usize {
        match role {
            ViewRole::From => 0,
            ViewRole::To => 1,
        }
    }

    fn record(&self, op: ContextOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl TransitionContext for RecordingContext {
    fn container_bounds(&self) -> Rect {
        self.container
    }

    fn initial_frame(&self, role: ViewRole) -> Rect {
        self.initial_frames[Self::index(role)]
    }

    fn final_frame(&self, role: ViewRole) -> Rect {
        self.final_frames[Self::index(role)]
    }

    fn mount_view(&self, role: ViewRole) {
        self.record(ContextOp::Mount(role));
    }

    fn set_frame(&self, role: ViewRole, frame: Rect) {
        self.record(ContextOp::SetFrame(role, frame));
    }

    fn update_percent(&self, percent: f32) {
        self.record(ContextOp::UpdatePercent(percent));
    }

    fn finish(&self) {
        self.cancelled.set(false);
        self.record(ContextOp::Finish);
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        self.record(ContextOp::Cancel);
    }

    fn was_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    fn complete_transition(&self, did_complete: bool) {
        self.record(ContextOp::Complete(did_complete));
    }
}
