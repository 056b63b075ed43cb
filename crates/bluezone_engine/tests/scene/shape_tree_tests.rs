//! Tests for shape creation, property updates and removal

use bluezone_engine::scene::DisplayItem;
use bluezone_engine::{Color, Point, RetainedScene, Scene, ShapeKind, Size, Stroke};

#[test]
fn test_append_creates_root_shapes() {
    let mut scene = RetainedScene::new();
    let a = scene.append_rectangle(None);
    let b = scene.append_text_line(None);

    assert_ne!(a, b);
    assert_eq!(scene.shape_count(), 2);
    assert_eq!(scene.roots(), &[a, b]);
    assert_eq!(scene.shape(a).unwrap().kind, ShapeKind::Rectangle);
}

#[test]
fn test_children_are_removed_with_their_group() {
    let mut scene = RetainedScene::new();
    let group = scene.append_group(None);
    let child = scene.append_rectangle(Some(group));
    let other = scene.append_rectangle(None);

    scene.remove_shape(group);

    assert!(!scene.contains(group));
    assert!(!scene.contains(child));
    assert!(scene.contains(other));
    assert_eq!(scene.roots(), &[other]);
    assert!(scene.shape(child).is_err());
}

#[test]
fn test_removing_child_detaches_it_from_parent() {
    let mut scene = RetainedScene::new();
    let group = scene.append_group(None);
    let child = scene.append_rectangle(Some(group));

    scene.remove_shape(child);

    assert!(scene.shape(group).unwrap().children.is_empty());
    assert_eq!(scene.shape_count(), 1);
}

#[test]
fn test_setters_on_removed_shape_are_ignored() {
    let mut scene = RetainedScene::new();
    let rect = scene.append_rectangle(None);
    scene.remove_shape(rect);

    scene.set_position(rect, Point::new(1.0, 2.0));
    scene.set_text(rect, "gone");

    assert_eq!(scene.position(rect), None);
    assert_eq!(scene.shape_count(), 0);
}

#[test]
fn test_display_list_resolves_group_offset_and_opacity() {
    let mut scene = RetainedScene::new();
    let group = scene.append_group(None);
    scene.set_position(group, Point::new(100.0, 50.0));
    scene.set_opacity(group, 0.5);

    let rect = scene.append_rectangle(Some(group));
    scene.set_position(rect, Point::new(10.0, 5.0));
    scene.set_size(rect, Size::new(20.0, 30.0));
    scene.set_fill_color(rect, Some(Color::WHITE));
    scene.set_stroke(rect, Some(Stroke::new(Color::BLACK, 2.0)));

    let list = scene.display_list();
    assert_eq!(list.len(), 1);
    assert_eq!(
        list.items[0],
        DisplayItem::Rect {
            origin: Point::new(110.0, 55.0),
            size: Size::new(20.0, 30.0),
            fill: Some(Color::WHITE),
            stroke: Some(Stroke::new(Color::BLACK, 2.0)),
            opacity: 0.5,
        }
    );
}

#[test]
fn test_hidden_shapes_are_not_painted() {
    let mut scene = RetainedScene::new();
    let text = scene.append_text_line(None);
    scene.set_text(text, "480");
    let path = scene.append_path(None);
    scene.set_path(path, vec![Point::new(0.0, 0.0), Point::new(-5.0, 10.0), Point::new(5.0, 10.0)]);

    scene.set_visible(text, false);

    let list = scene.display_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list.texts().count(), 0);
}

#[test]
fn test_clear_removes_everything() {
    let mut scene = RetainedScene::new();
    let group = scene.append_group(None);
    scene.append_rectangle(Some(group));
    scene.append_text_line(None);

    scene.clear();

    assert_eq!(scene.shape_count(), 0);
    assert!(scene.roots().is_empty());
    assert!(scene.display_list().is_empty());
}
