//! Host-facing contracts for one presentation or dismissal.

use crate::geometry::Rect;

/// Which end of the transition a view belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewRole {
    /// The view the transition moves away from.
    From,
    /// The view the transition moves toward.
    To,
}

/// Whether the panel is coming on screen or leaving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDirection {
    Presenting,
    Dismissing,
}

/// Host-owned handle coordinating one transition between this library and
/// the platform's rendering/animation machinery.
///
/// A context lives for exactly one presentation or dismissal and is
/// borrowed by at most one interactive driver and exactly one animator.
/// The driver alone calls [`TransitionContext::update_percent`],
/// [`TransitionContext::finish`] and [`TransitionContext::cancel`]; the
/// animator alone calls [`TransitionContext::complete_transition`].
pub trait TransitionContext {
    /// Bounds of the stationary transition container.
    fn container_bounds(&self) -> Rect;

    /// Frame a view occupies when the transition starts.
    fn initial_frame(&self, role: ViewRole) -> Rect;

    /// Frame a view settles at when the transition finishes.
    fn final_frame(&self, role: ViewRole) -> Rect;

    /// Inserts a view into the container ahead of its entrance.
    fn mount_view(&self, role: ViewRole);

    /// Applies a frame to a view immediately, outside the animated tween.
    fn set_frame(&self, role: ViewRole, frame: Rect);

    /// Scrubs the in-flight animation to `percent` complete.
    fn update_percent(&self, percent: f32);

    /// Runs the in-flight animation forward to its finished end state.
    fn finish(&self);

    /// Runs the in-flight animation back to its cancelled end state.
    fn cancel(&self);

    /// Whether the transition was cancelled, readable at completion time.
    fn was_cancelled(&self) -> bool;

    /// Reports the transition's externally visible outcome. Called exactly
    /// once, by the animator's completion.
    fn complete_transition(&self, did_complete: bool);
}

/// Scrub-and-resolve capability of a percent-driven interactive
/// transition.
///
/// Implemented by interactive drivers so a host binding can hold the
/// capability without naming a concrete driver type.
pub trait PercentDriven {
    /// Moves the transition to `percent` complete.
    fn update(&self, percent: f32);

    /// Resolves the transition toward its finished end state.
    fn finish(&self);

    /// Resolves the transition toward its cancelled end state.
    fn cancel(&self);
}
