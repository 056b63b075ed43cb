use std::time::Duration;

use bluezone_edit::{BlueZoneOptions, Zone};
use bluezone_engine::{
    scene::{HorizontalAlignment, VerticalAlignment},
    Color, Point, RetainedScene, Scene, Size, ZoneFamily,
};

fn rendered(start: i32, end: i32, family: ZoneFamily, index: usize) -> (RetainedScene, Zone) {
    let mut scene = RetainedScene::new();
    let zone = Zone::new(start, end, family, index, &mut scene, None);
    zone.render(&mut scene, &BlueZoneOptions::default());
    (scene, zone)
}

#[test]
fn test_band_spans_view() {
    let (scene, zone) = rendered(480, 500, ZoneFamily::Primary, 1);
    let band = scene.shape(zone.shapes().band).unwrap();
    assert_eq!(band.position, Point::new(-6000.0, 480.0));
    assert_eq!(band.size, Size::new(24000.0, 20.0));
    assert_eq!(band.fill, Some(Color::new(0.5, 0.7, 1.0, 0.3)));
    assert_eq!(band.stroke, None);
}

#[test]
fn test_first_primary_zone_marks_top_edge() {
    let (scene, zone) = rendered(-10, 0, ZoneFamily::Primary, 0);
    let marker = scene.shape(zone.shapes().marker).unwrap();
    assert_eq!(marker.fill, Some(Color::new(0.2, 0.2, 0.8, 1.0)));
    assert_eq!(marker.path, vec![Point::new(0.0, 0.0), Point::new(-5.0, -10.0), Point::new(5.0, -10.0)]);
}

#[test]
fn test_later_primary_zone_marks_bottom_edge() {
    let (scene, zone) = rendered(480, 500, ZoneFamily::Primary, 1);
    let marker = scene.shape(zone.shapes().marker).unwrap();
    assert_eq!(marker.fill, Some(Color::WHITE));
    assert_eq!(marker.path, vec![Point::new(0.0, 480.0), Point::new(-5.0, 490.0), Point::new(5.0, 490.0)]);
}

#[test]
fn test_other_zone_marks_top_edge() {
    let (scene, zone) = rendered(-250, -240, ZoneFamily::Other, 3);
    assert!(zone.marks_top_edge());
    let marker = scene.shape(zone.shapes().marker).unwrap();
    assert_eq!(marker.path[0], Point::new(0.0, -240.0));
    let band = scene.shape(zone.shapes().band).unwrap();
    assert_eq!(band.fill, Some(Color::new(1.0, 0.6, 0.4, 0.3)));
}

#[test]
fn test_labels() {
    let (scene, zone) = rendered(480, 500, ZoneFamily::Primary, 1);
    let start_label = scene.shape(zone.shapes().start_label).unwrap();
    let end_label = scene.shape(zone.shapes().end_label).unwrap();

    assert_eq!(start_label.text, "480");
    assert_eq!(start_label.position, Point::new(-50.0, 460.0));
    assert_eq!(end_label.text, "500");
    assert_eq!(end_label.position, Point::new(-50.0, 520.0));

    assert_eq!(end_label.text_style.point_size, 12.0);
    assert_eq!(end_label.text_style.horizontal, HorizontalAlignment::Right);
    assert_eq!(end_label.text_style.vertical, VerticalAlignment::Center);
    assert_eq!(end_label.fill, Some(Color::new(0.0, 0.0, 0.0, 0.5)));
    assert!(start_label.visible && end_label.visible);
}

#[test]
fn test_labels_follow_selection_when_not_always_shown() {
    let options = BlueZoneOptions {
        always_show_labels: false,
        ..Default::default()
    };
    let mut scene = RetainedScene::new();
    let mut zone = Zone::new(0, 20, ZoneFamily::Primary, 0, &mut scene, None);
    zone.render(&mut scene, &options);
    assert!(!scene.shape(zone.shapes().start_label).unwrap().visible);

    zone.select(Point::new(0.0, 1.0));
    zone.render(&mut scene, &options);
    assert!(scene.shape(zone.shapes().start_label).unwrap().visible);
    assert!(scene.shape(zone.shapes().end_label).unwrap().visible);
}

#[test]
fn test_outline_when_fully_selected() {
    let (mut scene, mut zone) = rendered(0, 20, ZoneFamily::Primary, 0);
    zone.select_both(0.0);
    zone.render(&mut scene, &BlueZoneOptions::default());
    let stroke = scene.shape(zone.shapes().band).unwrap().stroke.unwrap();
    assert_eq!(stroke.width, 2.0);
    assert_eq!(stroke.color, Color::new(0.5, 0.7, 1.0, 1.0));

    zone.select(Point::new(0.0, 1.0));
    zone.render(&mut scene, &BlueZoneOptions::default());
    assert_eq!(scene.shape(zone.shapes().band).unwrap().stroke, None);
}

#[test]
fn test_flip_without_animation() {
    let (mut scene, mut zone) = rendered(0, 20, ZoneFamily::Primary, 0);
    zone.select_both(0.0);
    let shapes_before = scene.shape_count();

    zone.flip(&mut scene, &BlueZoneOptions::default(), false);
    assert_eq!(zone.family(), ZoneFamily::Other);
    assert!(!zone.is_selected());
    assert_eq!(scene.shape_count(), shapes_before);
    let band = scene.shape(zone.shapes().band).unwrap();
    assert_eq!(band.fill, Some(Color::new(1.0, 0.6, 0.4, 0.3)));
    assert_eq!(band.stroke, None);

    zone.flip(&mut scene, &BlueZoneOptions::default(), false);
    assert_eq!(zone.family(), ZoneFamily::Primary);
}

#[test]
fn test_flip_animation_removes_itself() {
    let (mut scene, mut zone) = rendered(100, 120, ZoneFamily::Primary, 1);
    let shapes_before = scene.shape_count();

    zone.flip(&mut scene, &BlueZoneOptions::default(), true);
    // highlight group with its outline
    assert_eq!(scene.shape_count(), shapes_before + 2);
    assert_eq!(scene.running_animation_count(), 2);

    scene.advance(Duration::from_millis(400));
    assert_eq!(scene.shape_count(), shapes_before + 2);

    scene.advance(Duration::from_millis(400));
    assert_eq!(scene.shape_count(), shapes_before);
    assert_eq!(scene.running_animation_count(), 0);
}

#[test]
fn test_animation_targets() {
    let (mut scene, zone) = rendered(100, 120, ZoneFamily::Other, 0);
    let before: Vec<_> = scene.roots().to_vec();
    zone.animate(&mut scene, &BlueZoneOptions::default());
    let group = *scene.roots().iter().find(|id| !before.contains(id)).unwrap();
    let outline = scene.shape(group).unwrap().children[0];

    assert_eq!(scene.shape(group).unwrap().position, Point::new(-6000.0, 100.0));
    let stroke = scene.shape(outline).unwrap().stroke.unwrap();
    assert_eq!(stroke.width, 2.0);
    assert_eq!(stroke.color, Color::new(1.0, 0.6, 0.4, 1.0));
    assert_eq!(scene.shape(outline).unwrap().fill, None);

    scene.advance(Duration::from_millis(799));
    let group_node = scene.shape(group).unwrap();
    let outline_node = scene.shape(outline).unwrap();
    assert!(group_node.opacity < 0.01);
    assert!((group_node.position.y - 95.0).abs() < 0.01);
    assert!((outline_node.size.height - 30.0).abs() < 0.01);
    assert!((outline_node.stroke.unwrap().width - 1.0).abs() < 0.01);

    scene.advance(Duration::from_millis(1));
    assert!(!scene.contains(group));
    assert!(!scene.contains(outline));
}

#[test]
fn test_remove_takes_shapes_out_of_scene() {
    let (mut scene, zone) = rendered(0, 20, ZoneFamily::Primary, 0);
    assert_eq!(scene.shape_count(), 4);
    zone.remove(&mut scene);
    assert_eq!(scene.shape_count(), 0);
    for shape in zone.shapes().all() {
        assert!(!scene.contains(shape));
    }
}

#[test]
fn test_zones_with_same_edges_own_separate_shapes() {
    let mut scene = RetainedScene::new();
    let options = BlueZoneOptions::default();
    let first = Zone::new(100, 120, ZoneFamily::Primary, 1, &mut scene, None);
    let second = Zone::new(100, 120, ZoneFamily::Primary, 1, &mut scene, None);
    first.render(&mut scene, &options);
    second.render(&mut scene, &options);

    first.remove(&mut scene);
    for shape in second.shapes().all() {
        assert!(scene.contains(shape));
        assert!(!first.shapes().all().contains(&shape));
    }
}
