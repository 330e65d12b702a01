use super::*;

use slideover_core::{Edge, GesturePhase, GestureSample, Point, Rect, Size, Vector};

fn geometry(width: f32, height: f32) -> SceneGeometry {
    let container = Rect::from_size(Size::new(width, height));
    SceneGeometry {
        container,
        dragged_view: container,
    }
}

fn sample_at(x: f32, y: f32) -> GestureSample {
    GestureSample::new(GesturePhase::Changed, Point::new(x, y), Vector::ZERO)
}

fn sample_by(dx: f32, dy: f32) -> GestureSample {
    GestureSample::new(GesturePhase::Changed, Point::ZERO, Vector::new(dx, dy))
}

#[test]
fn right_edge_percent_is_distance_from_the_right() {
    let adapter = EdgePercentAdapter::new(Edge::Right);
    let percent = adapter.percent_for_gesture(&sample_at(90.0, 0.0), &geometry(300.0, 600.0));
    assert!((percent - 0.7).abs() < 1e-6);
}

#[test]
fn left_edge_percent_is_distance_from_the_left() {
    let adapter = EdgePercentAdapter::new(Edge::Left);
    let percent = adapter.percent_for_gesture(&sample_at(90.0, 0.0), &geometry(300.0, 600.0));
    assert!((percent - 0.3).abs() < 1e-6);
}

#[test]
fn vertical_edges_divide_by_container_height() {
    let geometry = geometry(300.0, 600.0);

    let top = EdgePercentAdapter::new(Edge::Top);
    let percent = top.percent_for_gesture(&sample_at(0.0, 150.0), &geometry);
    assert!((percent - 0.25).abs() < 1e-6);

    let bottom = EdgePercentAdapter::new(Edge::Bottom);
    let percent = bottom.percent_for_gesture(&sample_at(0.0, 150.0), &geometry);
    assert!((percent - 0.75).abs() < 1e-6);
}

#[test]
fn edge_percent_is_zero_at_the_edge_and_one_at_the_opposite_edge() {
    let geometry = geometry(300.0, 600.0);
    let cases = [
        (Edge::Right, sample_at(300.0, 0.0), sample_at(0.0, 0.0)),
        (Edge::Left, sample_at(0.0, 0.0), sample_at(300.0, 0.0)),
        (Edge::Bottom, sample_at(0.0, 600.0), sample_at(0.0, 0.0)),
        (Edge::Top, sample_at(0.0, 0.0), sample_at(0.0, 600.0)),
    ];

    for (edge, at_edge, at_opposite) in cases {
        let adapter = EdgePercentAdapter::new(edge);
        assert_eq!(
            adapter.percent_for_gesture(&at_edge, &geometry),
            0.0,
            "{edge:?} start"
        );
        assert_eq!(
            adapter.percent_for_gesture(&at_opposite, &geometry),
            1.0,
            "{edge:?} end"
        );
    }
}

#[test]
fn edge_percent_grows_monotonically_along_the_reveal_direction() {
    let geometry = geometry(300.0, 600.0);
    let paths = [
        (
            Edge::Right,
            [(280.0, 0.0), (210.0, 0.0), (120.0, 0.0), (40.0, 0.0)],
        ),
        (
            Edge::Left,
            [(20.0, 0.0), (90.0, 0.0), (180.0, 0.0), (260.0, 0.0)],
        ),
        (
            Edge::Top,
            [(0.0, 40.0), (0.0, 180.0), (0.0, 360.0), (0.0, 520.0)],
        ),
        (
            Edge::Bottom,
            [(0.0, 560.0), (0.0, 420.0), (0.0, 240.0), (0.0, 80.0)],
        ),
    ];

    for (edge, path) in paths {
        let adapter = EdgePercentAdapter::new(edge);
        let percents: Vec<f32> = path
            .iter()
            .map(|&(x, y)| adapter.percent_for_gesture(&sample_at(x, y), &geometry))
            .collect();
        for pair in percents.windows(2) {
            assert!(pair[0] < pair[1], "{edge:?}: {percents:?}");
        }
    }
}

#[test]
fn edge_percent_is_not_clamped() {
    let adapter = EdgePercentAdapter::new(Edge::Right);
    let geometry = geometry(300.0, 600.0);

    // Overshooting past the opposite edge keeps growing past 1.
    let percent = adapter.percent_for_gesture(&sample_at(-30.0, 0.0), &geometry);
    assert!((percent - 1.1).abs() < 1e-6);

    // Samples outside the starting edge go negative.
    let percent = adapter.percent_for_gesture(&sample_at(330.0, 0.0), &geometry);
    assert!((percent + 0.1).abs() < 1e-6);
}

#[test]
fn pan_percent_divides_translation_by_the_dragged_view_width() {
    let adapter = PanPercentAdapter::new();
    let mut geometry = geometry(600.0, 600.0);
    geometry.dragged_view = Rect::new(300.0, 0.0, 300.0, 600.0);

    let percent = adapter.percent_for_gesture(&sample_by(150.0, 0.0), &geometry);
    assert!((percent - 0.5).abs() < 1e-6);
}

#[test]
fn pan_percent_ignores_vertical_translation() {
    let adapter = PanPercentAdapter::new();
    let percent = adapter.percent_for_gesture(&sample_by(0.0, 200.0), &geometry(300.0, 600.0));
    assert_eq!(percent, 0.0);
}

#[test]
fn thresholds_differ_per_drag_style() {
    assert_eq!(EdgePercentAdapter::new(Edge::Left).toggle_threshold(), 0.5);
    assert_eq!(PanPercentAdapter::new().toggle_threshold(), 0.3);
}
