//! Scripted gesture streams for driving transition tests.

use slideover_core::{GesturePhase, GestureSample, Point, Vector};

/// Ordered gesture samples built fluently: one began, any number of
/// changed, one terminal.
#[derive(Clone, Debug, Default)]
pub struct GestureScript {
    samples: Vec<GestureSample>,
}

impl GestureScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognition sample at `location`.
    pub fn began_at(self, location: Point) -> Self {
        self.push(GesturePhase::Began, location, Vector::ZERO)
    }

    /// Movement sample at `location` in container space.
    pub fn changed_at(self, location: Point) -> Self {
        self.push(GesturePhase::Changed, location, Vector::ZERO)
    }

    /// Movement sample carrying only accumulated translation.
    pub fn changed_by(self, translation: Vector) -> Self {
        self.push(GesturePhase::Changed, Point::ZERO, translation)
    }

    /// Clean release at `location`.
    pub fn ended_at(self, location: Point) -> Self {
        self.push(GesturePhase::Ended, location, Vector::ZERO)
    }

    /// Clean release carrying only accumulated translation.
    pub fn ended_by(self, translation: Vector) -> Self {
        self.push(GesturePhase::Ended, Point::ZERO, translation)
    }

    /// Host-side interruption.
    pub fn cancelled(self) -> Self {
        self.push(GesturePhase::Cancelled, Point::ZERO, Vector::ZERO)
    }

    pub fn samples(&self) -> &[GestureSample] {
        &self.samples
    }

    fn push(mut self, phase: GesturePhase, location: Point, translation: Vector) -> Self {
        self.samples
            .push(GestureSample::new(phase, location, translation));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_preserves_phase_order() {
        let script = GestureScript::new()
            .began_at(Point::new(300.0, 10.0))
            .changed_at(Point::new(250.0, 10.0))
            .ended_at(Point::new(120.0, 10.0));

        let phases: Vec<GesturePhase> = script.samples().iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                GesturePhase::Began,
                GesturePhase::Changed,
                GesturePhase::Ended,
            ]
        );
    }
}
