//! Transition policy: which animator and which driver serve a request.

use slideover_core::{Edge, GestureKind, TransitionDirection};

use crate::adapter::{EdgePercentAdapter, PanPercentAdapter};
use crate::animator::TransitionAnimator;
use crate::driver::InteractiveTransitionDriver;

/// One presentation or dismissal ask.
///
/// Built by the trigger at the moment it fires and consumed immediately by
/// the coordinator's factory calls; it is never stored, so two triggers
/// cannot race to overwrite each other's edge or gesture kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRequest {
    pub direction: TransitionDirection,
    pub edge: Edge,
    pub trigger: GestureKind,
}

impl TransitionRequest {
    pub fn presenting(edge: Edge, trigger: GestureKind) -> Self {
        Self {
            direction: TransitionDirection::Presenting,
            edge,
            trigger,
        }
    }

    pub fn dismissing(edge: Edge, trigger: GestureKind) -> Self {
        Self {
            direction: TransitionDirection::Dismissing,
            edge,
            trigger,
        }
    }
}

/// Stateless factory the host consults at the fixed points of its own
/// transition lifecycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionCoordinator;

impl TransitionCoordinator {
    pub fn new() -> Self {
        Self
    }

    /// Animator for a presentation. Transitions are always animated,
    /// interactively or not, so this never declines.
    pub fn presentation_animator(&self, request: &TransitionRequest) -> TransitionAnimator {
        debug_assert_eq!(request.direction, TransitionDirection::Presenting);
        TransitionAnimator::new(TransitionDirection::Presenting, request.edge)
    }

    /// Animator for a dismissal; never declines either.
    pub fn dismissal_animator(&self, request: &TransitionRequest) -> TransitionAnimator {
        debug_assert_eq!(request.direction, TransitionDirection::Dismissing);
        TransitionAnimator::new(TransitionDirection::Dismissing, request.edge)
    }

    /// Driver for an interactive presentation.
    ///
    /// Only an edge-anchored swipe presents interactively. Returning a
    /// driver for anything else would tell the host to wait for percent
    /// updates that are never coming, so everything else is `None`.
    pub fn presentation_driver(
        &self,
        request: &TransitionRequest,
    ) -> Option<InteractiveTransitionDriver> {
        debug_assert_eq!(request.direction, TransitionDirection::Presenting);
        match request.trigger {
            GestureKind::EdgeSwipe => Some(InteractiveTransitionDriver::new(Box::new(
                EdgePercentAdapter::new(request.edge),
            ))),
            GestureKind::FreeDrag | GestureKind::Programmatic => None,
        }
    }

    /// Driver for an interactive dismissal.
    ///
    /// Edge swipes track against the container, free drags against the
    /// panel itself. Programmatic dismissals (taps, API calls) run the
    /// plain animation with no driver.
    pub fn dismissal_driver(
        &self,
        request: &TransitionRequest,
    ) -> Option<InteractiveTransitionDriver> {
        debug_assert_eq!(request.direction, TransitionDirection::Dismissing);
        match request.trigger {
            GestureKind::EdgeSwipe => Some(InteractiveTransitionDriver::new(Box::new(
                EdgePercentAdapter::new(request.edge),
            ))),
            GestureKind::FreeDrag => Some(InteractiveTransitionDriver::new(Box::new(
                PanPercentAdapter::new(),
            ))),
            GestureKind::Programmatic => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
