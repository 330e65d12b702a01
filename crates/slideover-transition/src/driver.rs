//! Interactive transition driver: a gesture stream resolved into one
//! finish-or-cancel outcome.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slideover_core::{GesturePhase, GestureSample, PercentDriven, TransitionContext, ViewRole};

use crate::adapter::{GestureSignalAdapter, SceneGeometry};

/// Lifecycle of one interactive transition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Created, no gesture samples seen yet.
    Idle,
    /// Following the finger, forwarding percent updates.
    Tracking,
    /// A terminal sample arrived; deciding finish versus cancel.
    Resolving,
    /// The outcome is committed. Later samples are ignored.
    Terminated,
}

/// Owns the percent-driven lifecycle for exactly one transition attempt.
///
/// The driver is created by the coordinator when a live gesture triggers a
/// transition, receives that gesture's samples for its duration, and is
/// dropped once the transition resolves. It never retries: a cancelled
/// attempt requires a fresh gesture, which produces a fresh driver.
pub struct InteractiveTransitionDriver {
    adapter: Box<dyn GestureSignalAdapter>,
    state: Cell<DriverState>,
    context: RefCell<Option<Rc<dyn TransitionContext>>>,
}

impl InteractiveTransitionDriver {
    /// Panics when the adapter reports a threshold outside (0, 1]; a
    /// driver with such a threshold could never cancel or never finish.
    pub fn new(adapter: Box<dyn GestureSignalAdapter>) -> Self {
        let threshold = adapter.toggle_threshold();
        assert!(
            threshold > 0.0 && threshold <= 1.0,
            "toggle threshold must be within (0, 1], got {threshold}"
        );
        Self {
            adapter,
            state: Cell::new(DriverState::Idle),
            context: RefCell::new(None),
        }
    }

    /// Stores the borrowed context once the host has begun the transition.
    ///
    /// Percent queries before this resolve to 0 rather than erroring; the
    /// only way to hit that window is a setup race during the first
    /// samples of the gesture.
    pub fn start(&self, context: Rc<dyn TransitionContext>) {
        self.context.borrow_mut().replace(context);
    }

    pub fn state(&self) -> DriverState {
        self.state.get()
    }

    /// Percent at or above which a released drag resolves to finish.
    pub fn toggle_threshold(&self) -> f32 {
        self.adapter.toggle_threshold()
    }

    /// Feeds one gesture sample through the state machine.
    pub fn on_gesture_event(&self, sample: &GestureSample) {
        if self.state.get() == DriverState::Terminated {
            log::debug!("gesture sample after the transition resolved; ignoring");
            return;
        }

        match sample.phase {
            GesturePhase::Began => {
                // The trigger already reacted to recognition by starting
                // the transition; the driver only begins following.
                self.state.set(DriverState::Tracking);
            }
            GesturePhase::Changed => {
                self.state.set(DriverState::Tracking);
                self.update(self.percent_for(sample));
            }
            GesturePhase::Ended => {
                self.state.set(DriverState::Resolving);
                let percent = self.percent_for(sample);
                if percent >= self.adapter.toggle_threshold() {
                    log::debug!("drag released at {percent:.3}: finishing");
                    self.finish();
                } else {
                    log::debug!("drag released at {percent:.3}: cancelling");
                    self.cancel();
                }
            }
            GesturePhase::Cancelled => {
                // Anything other than a clean release must never commit
                // the transition.
                self.state.set(DriverState::Resolving);
                self.cancel();
            }
        }
    }

    fn percent_for(&self, sample: &GestureSample) -> f32 {
        let context = self.context.borrow();
        match context.as_ref() {
            Some(context) => {
                let geometry = SceneGeometry {
                    container: context.container_bounds(),
                    dragged_view: context.initial_frame(ViewRole::From),
                };
                self.adapter.percent_for_gesture(sample, &geometry)
            }
            None => {
                log::trace!("percent queried before the transition started; reporting 0");
                0.0
            }
        }
    }
}

impl PercentDriven for InteractiveTransitionDriver {
    fn update(&self, percent: f32) {
        if let Some(context) = self.context.borrow().as_ref() {
            context.update_percent(percent);
        }
    }

    fn finish(&self) {
        self.state.set(DriverState::Terminated);
        // Taking the context releases the borrow at resolution; the driver
        // must not outlive its one transition.
        if let Some(context) = self.context.borrow_mut().take() {
            context.finish();
        }
    }

    fn cancel(&self) {
        self.state.set(DriverState::Terminated);
        if let Some(context) = self.context.borrow_mut().take() {
            context.cancel();
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
