use bluezone_edit::{EdgeSelection, Zone};
use bluezone_engine::{Point, RetainedScene, ZoneFamily};

fn zone(start: i32, end: i32) -> (RetainedScene, Zone) {
    let mut scene = RetainedScene::new();
    let zone = Zone::new(start, end, ZoneFamily::Primary, 0, &mut scene, None);
    (scene, zone)
}

#[test]
fn test_new_zone_orders_edges() {
    let (_scene, zone) = zone(20, 0);
    assert_eq!((zone.start(), zone.end()), (0, 20));
    assert!(!zone.is_selected());
}

#[test]
fn test_select_nearer_edge() {
    let (_scene, mut zone) = zone(0, 20);
    zone.select(Point::new(7.0, 4.0));
    assert_eq!(zone.start_selection(), EdgeSelection::Selected(7.0));
    assert_eq!(zone.end_selection(), EdgeSelection::Unselected);

    zone.select(Point::new(-3.0, 18.0));
    assert_eq!(zone.start_selection(), EdgeSelection::Unselected);
    assert_eq!(zone.end_selection(), EdgeSelection::Selected(-3.0));
}

#[test]
fn test_select_tie_goes_to_end() {
    let (_scene, mut zone) = zone(0, 20);
    zone.select(Point::new(0.0, 10.0));
    assert!(zone.end_selection().is_selected());
    assert!(!zone.start_selection().is_selected());
}

#[test]
fn test_anchor_at_zero_still_selected() {
    let (_scene, mut zone) = zone(0, 20);
    zone.select(Point::new(0.0, 1.0));
    assert!(zone.is_selected());
    assert_eq!(zone.start_selection().anchor(), Some(0.0));
}

#[test]
fn test_deselect() {
    let (_scene, mut zone) = zone(0, 20);
    zone.select_both(12.0);
    assert!(zone.is_fully_selected());
    zone.deselect();
    assert!(!zone.is_selected());
}

#[test]
fn test_distance() {
    let (_scene, zone) = zone(0, 20);
    assert_eq!(zone.distance(4.0), 4.0);
    assert_eq!(zone.distance(17.0), 3.0);
    assert_eq!(zone.distance(-6.0), 6.0);
    assert_eq!(zone.distance(50.0), 30.0);
}

#[test]
fn test_point_inside_is_strict() {
    let (_scene, zone) = zone(0, 20);
    assert!(zone.point_inside(10.0));
    assert!(zone.point_inside(0.5));
    assert!(!zone.point_inside(0.0));
    assert!(!zone.point_inside(20.0));
    assert!(!zone.point_inside(-1.0));
}

#[test]
fn test_display() {
    let mut scene = RetainedScene::new();
    let primary = Zone::new(-10, 0, ZoneFamily::Primary, 0, &mut scene, None);
    let other = Zone::new(480, 500, ZoneFamily::Other, 0, &mut scene, None);
    assert_eq!(primary.to_string(), "<BlueZone -10 0>");
    assert_eq!(other.to_string(), "<BlueZone (Other) 480 500>");
}
