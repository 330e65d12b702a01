//! Percent adapters: drag samples in, completion percentage out.

use slideover_core::{Edge, GestureSample, Rect};

use crate::constants::{EDGE_TOGGLE_THRESHOLD, PAN_TOGGLE_THRESHOLD};

/// Geometry snapshot an adapter reads alongside each sample.
#[derive(Clone, Copy, Debug)]
pub struct SceneGeometry {
    /// Bounds of the stationary transition container.
    pub container: Rect,
    /// Current frame of the view under the user's finger.
    pub dragged_view: Rect,
}

/// Converts a live drag sample into a completion percentage toward
/// revealing or dismissing the panel.
///
/// Implementations are pure with respect to the sample and geometry, and
/// they never clamp: callers can observe values below 0 or above 1 during
/// fast drags that overshoot the container.
pub trait GestureSignalAdapter {
    /// Fraction of the way the drag has travelled toward completion.
    fn percent_for_gesture(&self, sample: &GestureSample, geometry: &SceneGeometry) -> f32;

    /// Percent at or above which a released drag resolves to finish.
    fn toggle_threshold(&self) -> f32;
}

/// Percent as distance travelled from a screen edge.
///
/// Positions are measured in the transition container's coordinate space:
/// both endpoints' views are sliding during the transition, so the
/// container is the only space that holds still.
#[derive(Clone, Copy, Debug)]
pub struct EdgePercentAdapter {
    edge: Edge,
}

impl EdgePercentAdapter {
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }
}

impl GestureSignalAdapter for EdgePercentAdapter {
    fn percent_for_gesture(&self, sample: &GestureSample, geometry: &SceneGeometry) -> f32 {
        let width = geometry.container.width;
        let height = geometry.container.height;
        let location = sample.location;

        match self.edge {
            Edge::Right => (width - location.x) / width,
            Edge::Left => location.x / width,
            Edge::Bottom => (height - location.y) / height,
            Edge::Top => location.y / height,
        }
    }

    fn toggle_threshold(&self) -> f32 {
        EDGE_TOGGLE_THRESHOLD
    }
}

/// Percent as pan translation across the dragged view's own width.
///
/// Only horizontal translation is interpreted, which is correct for the
/// left/right panel configurations this library ships.
// TODO: project the translation onto the dismissal edge's travel axis so
// top/bottom panels track vertical drags too.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanPercentAdapter;

impl PanPercentAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl GestureSignalAdapter for PanPercentAdapter {
    fn percent_for_gesture(&self, sample: &GestureSample, geometry: &SceneGeometry) -> f32 {
        sample.translation.dx / geometry.dragged_view.width
    }

    fn toggle_threshold(&self) -> f32 {
        PAN_TOGGLE_THRESHOLD
    }
}

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod tests;
