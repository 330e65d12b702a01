//! Presented panel frame policy.

use slideover_core::{Point, Rect, Size};

/// Fraction of the container width the panel occupies.
///
/// Wide enough to hold real content, narrow enough to leave a strip of
/// the presenting screen visible as the dismissal target.
pub const PANEL_WIDTH_FRACTION: f32 = 0.8;

/// Frame policy for the presented panel: [`PANEL_WIDTH_FRACTION`] of the
/// container's width, the container's full height, pinned to the right
/// edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelLayout;

impl PanelLayout {
    pub fn new() -> Self {
        Self
    }

    /// Size of the panel inside a parent of `parent` size.
    pub fn size_in_parent(&self, parent: Size) -> Size {
        Size::new(parent.width * PANEL_WIDTH_FRACTION, parent.height)
    }

    /// Final frame of the presented panel inside the container.
    ///
    /// Panics on a degenerate container: the presentation controller is
    /// only asked for this frame while the container is installed, so an
    /// empty container means the host broke that contract.
    pub fn frame_in_container(&self, container: Rect) -> Rect {
        assert!(
            container.width > 0.0 && container.height > 0.0,
            "presented panel laid out in a degenerate container {container:?}"
        );
        let size = self.size_in_parent(container.size());
        let origin = Point::new(container.x + container.width - size.width, container.y);
        Rect::from_origin_size(origin, size)
    }
}
