//! Tests for timed transitions

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use bluezone_engine::scene::easing;
use bluezone_engine::{Color, Point, RetainedScene, Scene, ShapeId, Size, Stroke, Transition};

#[test]
fn test_transition_interpolates_linearly() {
    let mut scene = RetainedScene::new();
    let rect = scene.append_rectangle(None);
    scene.set_size(rect, Size::new(100.0, 20.0));

    scene.animate(rect, Transition::new(Duration::from_millis(800)).size(Size::new(100.0, 30.0)).opacity(0.0), None);

    scene.advance(Duration::from_millis(400));
    let node = scene.shape(rect).unwrap();
    assert!((node.size.height - 25.0).abs() < 1e-9);
    assert!((node.opacity - 0.5).abs() < 1e-9);
    assert!(scene.is_animating(rect));
}

#[test]
fn test_transition_snaps_to_target_when_finished() {
    let mut scene = RetainedScene::new();
    let rect = scene.append_rectangle(None);
    scene.set_stroke(rect, Some(Stroke::new(Color::BLACK, 2.0)));

    scene.animate(
        rect,
        Transition::new(Duration::from_millis(100))
            .easing(easing::ease_out_cubic)
            .stroke_width(1.0)
            .position(Point::new(0.0, -10.0)),
        None,
    );
    scene.advance(Duration::from_millis(250));

    let node = scene.shape(rect).unwrap();
    assert_eq!(node.stroke.unwrap().width, 1.0);
    assert_eq!(node.position, Point::new(0.0, -10.0));
    assert_eq!(scene.running_animation_count(), 0);
}

#[test]
fn test_completion_callback_can_remove_shape() {
    let mut scene = RetainedScene::new();
    let group = scene.append_group(None);
    scene.append_rectangle(Some(group));

    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    scene.animate(
        group,
        Transition::new(Duration::from_millis(800)).opacity(0.0),
        Some(Box::new(move |scene: &mut dyn Scene, id: ShapeId| {
            counter.set(counter.get() + 1);
            scene.remove_shape(id);
        })),
    );

    scene.advance(Duration::from_millis(500));
    assert_eq!(fired.get(), 0);
    assert!(scene.contains(group));

    scene.advance(Duration::from_millis(500));
    assert_eq!(fired.get(), 1);
    assert_eq!(scene.shape_count(), 0);

    scene.advance(Duration::from_millis(500));
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_removing_shape_cancels_its_animation() {
    let mut scene = RetainedScene::new();
    let rect = scene.append_rectangle(None);
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    scene.animate(
        rect,
        Transition::new(Duration::from_millis(10)).opacity(0.0),
        Some(Box::new(move |_: &mut dyn Scene, _: ShapeId| flag.set(true))),
    );

    scene.remove_shape(rect);
    scene.advance(Duration::from_millis(20));

    assert!(!fired.get());
    assert_eq!(scene.running_animation_count(), 0);
}
