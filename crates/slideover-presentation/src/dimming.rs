//! Dimmed backdrop behind the presented panel.

use std::cell::Cell;

use slideover_core::{GestureKind, TransitionDirection};
use slideover_transition::TransitionRequest;

use crate::presenter::DISMISSAL_EDGE;

/// Opacity of the backdrop's black fill when fully presented.
pub const BACKDROP_COLOR_ALPHA: f32 = 0.3;

/// Backdrop that fades in alongside presentation and routes the tap and
/// drag dismissal triggers.
///
/// The view's own alpha ramps 0 → 1 during presentation and back down
/// during dismissal. The host applies the ramp from its
/// alongside-transition hook so the fade scrubs and resolves together
/// with the slide.
pub struct DimmingOverlay {
    alpha: Cell<f32>,
}

impl DimmingOverlay {
    pub fn new() -> Self {
        Self {
            alpha: Cell::new(0.0),
        }
    }

    /// Current backdrop alpha in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.alpha.get()
    }

    /// Alpha the alongside-transition hook should apply at `progress`.
    ///
    /// Progress is clamped: the slide can overshoot during fast drags but
    /// the backdrop never goes darker than fully presented.
    pub fn alpha_at(direction: TransitionDirection, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match direction {
            TransitionDirection::Presenting => progress,
            TransitionDirection::Dismissing => 1.0 - progress,
        }
    }

    /// Advances the ramp to `progress` for `direction`.
    pub fn apply(&self, direction: TransitionDirection, progress: f32) {
        self.alpha.set(Self::alpha_at(direction, progress));
    }

    /// A tap on the backdrop: non-interactive dismissal.
    pub fn tap_request(&self) -> TransitionRequest {
        TransitionRequest::dismissing(DISMISSAL_EDGE, GestureKind::Programmatic)
    }

    /// A drag that began on the backdrop: interactive dismissal.
    pub fn drag_request(&self) -> TransitionRequest {
        TransitionRequest::dismissing(DISMISSAL_EDGE, GestureKind::FreeDrag)
    }
}

impl Default for DimmingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_runs_zero_to_one_while_presenting() {
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Presenting, 0.0), 0.0);
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Presenting, 0.4), 0.4);
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Presenting, 1.0), 1.0);
    }

    #[test]
    fn ramp_runs_one_to_zero_while_dismissing() {
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Dismissing, 0.0), 1.0);
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Dismissing, 1.0), 0.0);
    }

    #[test]
    fn overshoot_is_clamped() {
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Presenting, 1.3), 1.0);
        assert_eq!(DimmingOverlay::alpha_at(TransitionDirection::Presenting, -0.2), 0.0);
    }

    #[test]
    fn apply_tracks_the_latest_progress() {
        let overlay = DimmingOverlay::new();
        overlay.apply(TransitionDirection::Presenting, 0.6);
        assert_eq!(overlay.alpha(), 0.6);
        overlay.apply(TransitionDirection::Dismissing, 0.25);
        assert_eq!(overlay.alpha(), 0.75);
    }

    #[test]
    fn tap_dismissal_is_programmatic_and_drag_is_not() {
        let overlay = DimmingOverlay::new();
        assert_eq!(overlay.tap_request().trigger, GestureKind::Programmatic);
        assert_eq!(overlay.drag_request().trigger, GestureKind::FreeDrag);
        assert_eq!(overlay.tap_request().edge, DISMISSAL_EDGE);
    }
}
