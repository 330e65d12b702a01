//! Transition triggers: the gestures that open presentation and
//! dismissal requests.
//!
//! A trigger reacts only to gesture recognition. The samples that follow
//! belong to whichever driver the coordinator hands back for the request.

use slideover_core::{Edge, GestureKind, GesturePhase, GestureSample};
use slideover_transition::TransitionRequest;

/// Edge configuration for dismissals of the right-aligned panel.
///
/// `Left` gives the outgoing travel vector (+1, 0): the panel slides back
/// off the right side of the screen, retracing its entrance.
pub const DISMISSAL_EDGE: Edge = Edge::Left;

/// The presenting trigger: a swipe beginning at a screen edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgePresenter {
    edge: Edge,
}

impl EdgePresenter {
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The presenting request for a swipe that just began, `None` for
    /// every other phase.
    pub fn request_for(&self, sample: &GestureSample) -> Option<TransitionRequest> {
        (sample.phase == GesturePhase::Began)
            .then(|| TransitionRequest::presenting(self.edge, GestureKind::EdgeSwipe))
    }
}

/// Dismissal by dragging the open panel itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanDismisser;

impl PanDismisser {
    pub fn new() -> Self {
        Self
    }

    /// The dismissing request for a drag that just began on the panel,
    /// `None` for every other phase.
    pub fn request_for(&self, sample: &GestureSample) -> Option<TransitionRequest> {
        (sample.phase == GesturePhase::Began)
            .then(|| TransitionRequest::dismissing(DISMISSAL_EDGE, GestureKind::FreeDrag))
    }
}
