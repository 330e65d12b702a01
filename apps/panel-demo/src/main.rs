//! Headless walkthrough of a full panel cycle: interactive presentation,
//! a dismissal drag that releases too early, and a tap dismissal.

mod host;

use std::rc::Rc;

use host::{DemoContext, Resolution};
use slideover_core::{
    Edge, GesturePhase, GestureSample, Lerp, Point, Rect, TransitionDirection, Vector, ViewRole,
};
use slideover_presentation::{DimmingOverlay, EdgePresenter, PanelLayout, BACKDROP_COLOR_ALPHA};
use slideover_transition::{AnimationHandle, TransitionCoordinator};

const CONTAINER: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Slideover Panel Demo ===");
    println!("Simulates the host's transition lifecycle without a window:");
    println!("  - an edge swipe presents the panel interactively");
    println!("  - a drag released too early cancels its dismissal");
    println!("  - a backdrop tap dismisses with the plain animation");
    println!();

    let coordinator = TransitionCoordinator::new();
    let layout = PanelLayout::new();
    let dimming = DimmingOverlay::new();
    let panel_frame = layout.frame_in_container(CONTAINER);

    present_interactively(&coordinator, &dimming, panel_frame);
    dismiss_with_an_early_release(&coordinator, &dimming, panel_frame);
    dismiss_from_a_tap(&coordinator, &dimming, panel_frame);
}

fn present_interactively(
    coordinator: &TransitionCoordinator,
    dimming: &DimmingOverlay,
    panel_frame: Rect,
) {
    println!("-- interactive presentation (right-edge swipe) --");

    let presenter = EdgePresenter::new(Edge::Right);
    let began = GestureSample::new(GesturePhase::Began, Point::new(318.0, 200.0), Vector::ZERO);
    let request = presenter.request_for(&began).expect("swipe began");

    let context = Rc::new(DemoContext::presenting(CONTAINER, panel_frame));
    let animator = coordinator.presentation_animator(&request);
    let driver = coordinator
        .presentation_driver(&request)
        .expect("edge swipes present interactively");

    driver.start(context.clone());
    let handle = animator.animate(context.clone());
    driver.on_gesture_event(&began);

    // The finger tracks in from the right edge; the host scrubs the plan
    // at every update.
    for x in [290.0, 240.0, 190.0, 140.0] {
        driver.on_gesture_event(&GestureSample::new(
            GesturePhase::Changed,
            Point::new(x, 200.0),
            Vector::ZERO,
        ));
        scrub(&context, &handle, dimming, TransitionDirection::Presenting);
    }
    driver.on_gesture_event(&GestureSample::new(
        GesturePhase::Ended,
        Point::new(140.0, 200.0),
        Vector::ZERO,
    ));

    settle(&context, handle, dimming, TransitionDirection::Presenting);
}

fn dismiss_with_an_early_release(
    coordinator: &TransitionCoordinator,
    dimming: &DimmingOverlay,
    panel_frame: Rect,
) {
    println!("-- interactive dismissal, released below the threshold --");

    let request = dimming.drag_request();
    let context = Rc::new(DemoContext::dismissing(CONTAINER, panel_frame));
    let animator = coordinator.dismissal_animator(&request);
    let driver = coordinator
        .dismissal_driver(&request)
        .expect("backdrop drags dismiss interactively");

    driver.start(context.clone());
    let handle = animator.animate(context.clone());
    driver.on_gesture_event(&GestureSample::new(
        GesturePhase::Began,
        Point::new(30.0, 300.0),
        Vector::ZERO,
    ));

    // 256-wide panel: 30pt and 64pt of translation stay below the 30%
    // free-drag threshold.
    for dx in [30.0, 64.0] {
        driver.on_gesture_event(&GestureSample::new(
            GesturePhase::Changed,
            Point::ZERO,
            Vector::new(dx, 0.0),
        ));
        scrub(&context, &handle, dimming, TransitionDirection::Dismissing);
    }
    driver.on_gesture_event(&GestureSample::new(
        GesturePhase::Ended,
        Point::ZERO,
        Vector::new(64.0, 0.0),
    ));

    settle(&context, handle, dimming, TransitionDirection::Dismissing);
}

fn dismiss_from_a_tap(
    coordinator: &TransitionCoordinator,
    dimming: &DimmingOverlay,
    panel_frame: Rect,
) {
    println!("-- tap dismissal (non-interactive) --");

    let request = dimming.tap_request();
    let context = Rc::new(DemoContext::dismissing(CONTAINER, panel_frame));
    let animator = coordinator.dismissal_animator(&request);
    if coordinator.dismissal_driver(&request).is_some() {
        unreachable!("tap dismissal is never interactive");
    }

    let handle = animator.animate(context.clone());

    // No driver: the host just steps the plan over its fixed duration.
    let duration = handle.plan().duration_millis;
    for elapsed in (0..=duration).step_by(125) {
        let progress = elapsed as f32 / duration as f32;
        apply(&context, &handle, dimming, TransitionDirection::Dismissing, progress);
        println!("  t={elapsed:>3}ms {}", describe(&context, dimming));
    }
    handle.complete();
    report(&context);
}

/// Applies the plan and the dimming ramp at the driver's latest percent.
fn scrub(
    context: &Rc<DemoContext>,
    handle: &AnimationHandle,
    dimming: &DimmingOverlay,
    direction: TransitionDirection,
) {
    let percent = context.percent();
    apply(context, handle, dimming, direction, percent);
    println!("  {:>5.1}% {}", percent * 100.0, describe(context, dimming));
}

/// Races the animation to the resolved end state, then completes.
fn settle(
    context: &Rc<DemoContext>,
    handle: AnimationHandle,
    dimming: &DimmingOverlay,
    direction: TransitionDirection,
) {
    let target = match context.resolution() {
        Some(Resolution::Finished) => 1.0,
        Some(Resolution::Cancelled) => 0.0,
        None => 1.0,
    };

    let start = context.percent();
    let steps = 3;
    for step in 1..=steps {
        let progress = start.lerp(&target, step as f32 / steps as f32);
        apply(context, &handle, dimming, direction, progress);
        println!("   ...  {}", describe(context, dimming));
    }
    handle.complete();
    report(context);
}

fn apply(
    context: &Rc<DemoContext>,
    handle: &AnimationHandle,
    dimming: &DimmingOverlay,
    direction: TransitionDirection,
    progress: f32,
) {
    for tween in handle.plan().tweens.iter() {
        context.place(tween.role, tween.frame_at(progress));
    }
    dimming.apply(direction, progress);
}

fn describe(context: &Rc<DemoContext>, dimming: &DimmingOverlay) -> String {
    // Which role the panel plays differs per direction, but it is always
    // the narrower of the two stored frames.
    let from = context.frame(ViewRole::From);
    let to = context.frame(ViewRole::To);
    let panel = if from.width <= to.width { from } else { to };
    format!(
        "panel at x={:>5.1} backdrop opacity={:.2}",
        panel.x,
        dimming.alpha() * BACKDROP_COLOR_ALPHA
    )
}

fn report(context: &Rc<DemoContext>) {
    match context.outcome() {
        Some(true) => println!("  => transition completed\n"),
        Some(false) => println!("  => transition cancelled, panel restored\n"),
        None => unreachable!("the animation handle always reports an outcome"),
    }
}
