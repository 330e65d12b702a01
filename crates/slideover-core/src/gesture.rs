//! Gesture stream model consumed by the transition machinery.
//!
//! The platform recognises raw touches and reports discrete phase
//! transitions with continuous position samples. This module only models
//! that stream; it never inspects touches itself.

use crate::geometry::{Point, Vector};

/// Discrete lifecycle phase reported for a live gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// The platform recognised the gesture. The trigger reacts to this by
    /// opening a transition request; drivers take no action of their own.
    Began,
    /// The finger moved and a fresh position sample is available.
    Changed,
    /// The finger lifted cleanly.
    Ended,
    /// The platform interrupted or disowned the gesture.
    Cancelled,
}

/// One sample of a live drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Pointer location in the transition container's coordinate space.
    /// Both endpoints' views move during the slide; the container is the
    /// only stationary space to measure in.
    pub location: Point,
    /// Translation accumulated since the gesture began, in the dragged
    /// view's coordinate space.
    pub translation: Vector,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, location: Point, translation: Vector) -> Self {
        Self {
            phase,
            location,
            translation,
        }
    }
}

/// How a transition request was triggered.
///
/// Recorded once when the trigger fires and matched once by the
/// coordinator; there is no re-inspection of gesture objects at dispatch
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// A pan anchored to a screen edge.
    EdgeSwipe,
    /// A pan that may begin anywhere on the presented surface.
    FreeDrag,
    /// No live gesture: a tap or a direct API call.
    Programmatic,
}

impl GestureKind {
    /// Returns true when a live drag will be feeding samples to a driver.
    #[inline]
    pub fn is_live(self) -> bool {
        !matches!(self, GestureKind::Programmatic)
    }
}
