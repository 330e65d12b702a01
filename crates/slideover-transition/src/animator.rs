//! Directional slide animator.
//!
//! The animator computes one frame plan per transition, identical whether
//! the host scrubs it from a live drag or steps it over time. It does not
//! know which of the two is happening; reconciling scrub position with
//! the plan is the host's percent infrastructure's job.

use std::rc::Rc;

use smallvec::SmallVec;

use slideover_core::{Edge, Lerp, Rect, TransitionContext, TransitionDirection, ViewRole};

use crate::constants::SLIDE_DURATION_MILLIS;

/// Tween of one view's frame between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTween {
    pub role: ViewRole,
    pub start: Rect,
    pub end: Rect,
}

impl FrameTween {
    /// Frame at `progress` in [0, 1] along the tween.
    pub fn frame_at(&self, progress: f32) -> Rect {
        self.start.lerp(&self.end, progress)
    }
}

/// The frame plan for one slide.
#[derive(Clone, Debug)]
pub struct AnimationPlan {
    pub duration_millis: u64,
    pub tweens: SmallVec<[FrameTween; 2]>,
}

impl AnimationPlan {
    pub fn tween_for(&self, role: ViewRole) -> Option<&FrameTween> {
        self.tweens.iter().find(|tween| tween.role == role)
    }
}

/// One running slide: the plan plus its single-shot completion.
///
/// Completing consumes the handle, so a second outcome report is
/// unrepresentable rather than merely forbidden.
pub struct AnimationHandle {
    plan: AnimationPlan,
    context: Rc<dyn TransitionContext>,
}

impl AnimationHandle {
    pub fn plan(&self) -> &AnimationPlan {
        &self.plan
    }

    /// Reports the transition's final outcome to the context.
    ///
    /// The host resolves this once its animation primitive settles. The
    /// outcome reflects whether the transition was cancelled along the
    /// way (by the interactive driver, or by the host itself); this is the
    /// single point where that decision becomes externally visible.
    pub fn complete(self) {
        let did_complete = !self.context.was_cancelled();
        self.context.complete_transition(did_complete);
    }
}

/// Computes start and end frames for a directional slide along one edge
/// and positions the views for its first frame.
#[derive(Clone, Copy, Debug)]
pub struct TransitionAnimator {
    direction: TransitionDirection,
    edge: Edge,
}

impl TransitionAnimator {
    pub fn new(direction: TransitionDirection, edge: Edge) -> Self {
        Self { direction, edge }
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn duration_millis(&self) -> u64 {
        SLIDE_DURATION_MILLIS
    }

    /// Positions the views for the start of the slide, mounts the incoming
    /// view when presenting, and returns the running animation's handle.
    pub fn animate(&self, context: Rc<dyn TransitionContext>) -> AnimationHandle {
        log::debug!(
            "animating {:?} slide along the {:?} edge",
            self.direction,
            self.edge
        );

        let offset = self.edge.unit_offset();
        let from_frame = context.initial_frame(ViewRole::From);
        let to_final = context.final_frame(ViewRole::To);
        let mut tweens: SmallVec<[FrameTween; 2]> = SmallVec::new();

        match self.direction {
            TransitionDirection::Presenting => {
                // The incoming view starts one full frame off-screen,
                // opposite the direction it would leave through, and is
                // mounted only once that start frame is applied.
                let to_start = to_final.translate(
                    to_final.width * offset.dx * -1.0,
                    to_final.height * offset.dy * -1.0,
                );
                context.set_frame(ViewRole::From, from_frame);
                context.set_frame(ViewRole::To, to_start);
                context.mount_view(ViewRole::To);
                tweens.push(FrameTween {
                    role: ViewRole::To,
                    start: to_start,
                    end: to_final,
                });
            }
            TransitionDirection::Dismissing => {
                // The revealed view was never removed; it keeps its final
                // frame while the outgoing view slides off.
                let from_end = from_frame.translate(
                    from_frame.width * offset.dx,
                    from_frame.height * offset.dy,
                );
                context.set_frame(ViewRole::From, from_frame);
                context.set_frame(ViewRole::To, to_final);
                tweens.push(FrameTween {
                    role: ViewRole::From,
                    start: from_frame,
                    end: from_end,
                });
            }
        }

        AnimationHandle {
            plan: AnimationPlan {
                duration_millis: self.duration_millis(),
                tweens,
            },
            context,
        }
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
