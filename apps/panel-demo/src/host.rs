//! Simulated host: owns the views, the percent infrastructure, and the
//! frame application the platform's renderer would normally do.

use std::cell::Cell;

use slideover_core::{Rect, TransitionContext, ViewRole};

/// What the driver asked the percent infrastructure to do at release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Finished,
    Cancelled,
}

/// Concrete [`TransitionContext`] with real view-frame storage.
pub struct DemoContext {
    container: Rect,
    initial_frames: [Rect; 2],
    final_frames: [Rect; 2],
    frames: [Cell<Rect>; 2],
    mounted: Cell<bool>,
    percent: Cell<f32>,
    cancelled: Cell<bool>,
    resolution: Cell<Option<Resolution>>,
    outcome: Cell<Option<bool>>,
}

impl DemoContext {
    fn new(container: Rect, initial_frames: [Rect; 2], final_frames: [Rect; 2]) -> Self {
        Self {
            container,
            initial_frames,
            final_frames,
            frames: [Cell::new(initial_frames[0]), Cell::new(initial_frames[1])],
            mounted: Cell::new(false),
            percent: Cell::new(0.0),
            cancelled: Cell::new(false),
            resolution: Cell::new(None),
            outcome: Cell::new(None),
        }
    }

    /// Context for presenting `panel` over a screen filling `container`.
    pub fn presenting(container: Rect, panel: Rect) -> Self {
        Self::new(container, [container, panel], [container, panel])
    }

    /// Context for dismissing `panel`, revealing the screen beneath it.
    pub fn dismissing(container: Rect, panel: Rect) -> Self {
        Self::new(container, [panel, container], [panel, container])
    }

    pub fn percent(&self) -> f32 {
        self.percent.get()
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution.get()
    }

    pub fn outcome(&self) -> Option<bool> {
        self.outcome.get()
    }

    pub fn frame(&self, role: ViewRole) -> Rect {
        self.frames[Self::index(role)].get()
    }

    /// The renderer applying a frame to a view.
    pub fn place(&self, role: ViewRole, frame: Rect) {
        self.frames[Self::index(role)].set(frame);
    }

    fn index(role: ViewRole) -> usize {
        match role {
            ViewRole::From => 0,
            ViewRole::To => 1,
        }
    }
}

impl TransitionContext for DemoContext {
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
        log::debug!("mounting {role:?} view into the container");
        self.mounted.set(true);
    }

    fn set_frame(&self, role: ViewRole, frame: Rect) {
        self.place(role, frame);
    }

    fn update_percent(&self, percent: f32) {
        self.percent.set(percent);
    }

    fn finish(&self) {
        self.cancelled.set(false);
        self.resolution.set(Some(Resolution::Finished));
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        self.resolution.set(Some(Resolution::Cancelled));
    }

    fn was_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    fn complete_transition(&self, did_complete: bool) {
        self.outcome.set(Some(did_complete));
    }
}
