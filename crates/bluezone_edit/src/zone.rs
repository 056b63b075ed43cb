//! A single editable blue zone
//!
//! A [`Zone`] is an interval between two edges in glyph-space font units,
//! belonging to one of the two zone families. It owns four shapes in the
//! tool's scene (band, corner marker, two labels) and keeps them in sync
//! with its numeric state.

use std::time::Duration;

use bluezone_engine::{
    scene::{easing, HorizontalAlignment, VerticalAlignment},
    Color, Point, Scene, ShapeId, Size, Stroke, TextStyle, Transition, Vector, ZoneFamily,
};

use crate::{BlueZoneOptions, Modifiers};

const MARKER_COLOR: Color = Color::new(0.2, 0.2, 0.8, 1.0);
const LABEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);
const MARKER_HEIGHT: f64 = 10.0;
const MARKER_HALF_WIDTH: f64 = 5.0;
const LABEL_X: f64 = -50.0;
const LABEL_OFFSET: f64 = 20.0;
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(800);

/// Selection state of one zone edge.
///
/// A selected edge remembers the horizontal pointer position it was picked
/// at; drags move that anchor along with the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EdgeSelection {
    #[default]
    Unselected,
    Selected(f64),
}

impl EdgeSelection {
    pub fn is_selected(self) -> bool {
        matches!(self, EdgeSelection::Selected(_))
    }

    pub fn anchor(self) -> Option<f64> {
        match self {
            EdgeSelection::Selected(x) => Some(x),
            EdgeSelection::Unselected => None,
        }
    }

    fn shift_anchor(&mut self, dx: f64) {
        if let EdgeSelection::Selected(x) = self {
            *x += dx;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Start => Edge::End,
            Edge::End => Edge::Start,
        }
    }
}

/// Scene handles of the shapes drawn for one zone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneShapes {
    pub band: ShapeId,
    pub marker: ShapeId,
    pub start_label: ShapeId,
    pub end_label: ShapeId,
}

impl ZoneShapes {
    pub fn all(&self) -> [ShapeId; 4] {
        [self.band, self.marker, self.start_label, self.end_label]
    }
}

#[derive(Debug)]
pub struct Zone {
    start: i32,
    end: i32,
    /// Unsnapped edge positions following the pointer during a drag
    drag_start: f64,
    drag_end: f64,
    family: ZoneFamily,
    render_index: usize,
    start_selection: EdgeSelection,
    end_selection: EdgeSelection,
    container: Option<ShapeId>,
    shapes: ZoneShapes,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let other = if self.family.is_other() { " (Other)" } else { "" };
        write!(f, "<BlueZone{} {} {}>", other, self.start, self.end)
    }
}

impl Zone {
    /// Create a zone and append its shapes below `container`.
    ///
    /// Edges are stored in ascending order. The zone isn't drawn until
    /// [`render`](Self::render) is called.
    pub fn new(start: i32, end: i32, family: ZoneFamily, render_index: usize, scene: &mut dyn Scene, container: Option<ShapeId>) -> Self {
        let band = scene.append_rectangle(container);
        let marker = scene.append_path(container);
        let start_label = scene.append_text_line(container);
        let end_label = scene.append_text_line(container);

        let label_style = TextStyle {
            point_size: 12.0,
            horizontal: HorizontalAlignment::Right,
            vertical: VerticalAlignment::Center,
        };
        for label in [start_label, end_label] {
            scene.set_text_style(label, label_style);
            scene.set_fill_color(label, Some(LABEL_COLOR));
        }

        let (start, end) = (start.min(end), start.max(end));
        Self {
            start,
            end,
            drag_start: f64::from(start),
            drag_end: f64::from(end),
            family,
            render_index,
            start_selection: EdgeSelection::Unselected,
            end_selection: EdgeSelection::Unselected,
            container,
            shapes: ZoneShapes {
                band,
                marker,
                start_label,
                end_label,
            },
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Edges as `(min, max)`, regardless of the stored order.
    pub fn range(&self) -> (i32, i32) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    pub fn height(&self) -> i32 {
        self.end - self.start
    }

    pub fn family(&self) -> ZoneFamily {
        self.family
    }

    pub fn render_index(&self) -> usize {
        self.render_index
    }

    pub fn start_selection(&self) -> EdgeSelection {
        self.start_selection
    }

    pub fn end_selection(&self) -> EdgeSelection {
        self.end_selection
    }

    pub fn shapes(&self) -> &ZoneShapes {
        &self.shapes
    }

    pub fn is_selected(&self) -> bool {
        self.start_selection.is_selected() || self.end_selection.is_selected()
    }

    pub fn is_fully_selected(&self) -> bool {
        self.start_selection.is_selected() && self.end_selection.is_selected()
    }

    /// Select the edge nearer to `point.y`, ties go to the end edge.
    pub fn select(&mut self, point: Point) {
        self.deselect();
        self.sync_drag_edges();
        let start_distance = (f64::from(self.start) - point.y).abs();
        let end_distance = (f64::from(self.end) - point.y).abs();
        if start_distance < end_distance {
            self.start_selection = EdgeSelection::Selected(point.x);
        } else {
            self.end_selection = EdgeSelection::Selected(point.x);
        }
    }

    pub fn select_edge(&mut self, edge: Edge, anchor_x: f64) {
        self.sync_drag_edges();
        match edge {
            Edge::Start => self.start_selection = EdgeSelection::Selected(anchor_x),
            Edge::End => self.end_selection = EdgeSelection::Selected(anchor_x),
        }
    }

    pub fn select_both(&mut self, anchor_x: f64) {
        self.sync_drag_edges();
        self.start_selection = EdgeSelection::Selected(anchor_x);
        self.end_selection = EdgeSelection::Selected(anchor_x);
    }

    pub fn deselect(&mut self) {
        self.start_selection = EdgeSelection::Unselected;
        self.end_selection = EdgeSelection::Unselected;
    }

    /// Distance from `y` to the nearer edge
    pub fn distance(&self, y: f64) -> f64 {
        let start_distance = (f64::from(self.start) - y).abs();
        let end_distance = (f64::from(self.end) - y).abs();
        start_distance.min(end_distance)
    }

    /// `true` if `y` lies strictly between the edges.
    pub fn point_inside(&self, y: f64) -> bool {
        let (low, high) = self.range();
        f64::from(low) < y && y < f64::from(high)
    }

    /// Move the selected edges and redraw.
    ///
    /// Pointer drags (`keyed == false`) move each selected edge against
    /// `delta.dy`, since the pointer delta is in screen direction, and
    /// carry the edge anchors along `delta.dx`. A zone with both edges
    /// selected does not move under the pointer.
    ///
    /// Keyed moves shift the end edge by `delta.dy`, or the start edge while
    /// alternate is held, no matter which edge is selected.
    ///
    /// While shift is held the zone height snaps to `options.snap_step`,
    /// keeping the edge that did not move in place. Drags snap from the
    /// pointer's unsnapped position, so small steps add up.
    pub fn move_selection(&mut self, delta: Vector, keyed: bool, modifiers: Modifiers, scene: &mut dyn Scene, options: &BlueZoneOptions) {
        let moved = self.move_edges(delta, keyed, modifiers, options.snap_step);
        if moved.is_some() {
            self.render(scene, options);
        }
    }

    fn move_edges(&mut self, delta: Vector, keyed: bool, modifiers: Modifiers, snap_step: i32) -> Option<Edge> {
        let mut moved = None;
        if keyed {
            self.sync_drag_edges();
            let dy = delta.dy.round();
            if modifiers.alternate() {
                self.drag_start += dy;
                moved = Some(Edge::Start);
            } else {
                self.drag_end += dy;
                moved = Some(Edge::End);
            }
        } else if !self.is_fully_selected() {
            if self.start_selection.is_selected() {
                self.start_selection.shift_anchor(delta.dx);
                self.drag_start -= delta.dy;
                moved = Some(Edge::Start);
            }
            if self.end_selection.is_selected() {
                self.end_selection.shift_anchor(delta.dx);
                self.drag_end -= delta.dy;
                moved = Some(Edge::End);
            }
        }

        let mut moved = moved?;

        if self.drag_start > self.drag_end {
            std::mem::swap(&mut self.drag_start, &mut self.drag_end);
            std::mem::swap(&mut self.start_selection, &mut self.end_selection);
            moved = moved.opposite();
        }
        self.start = self.drag_start.round() as i32;
        self.end = self.drag_end.round() as i32;

        if modifiers.shift() && snap_step > 0 {
            let snapped = snap_to_step(self.height(), snap_step);
            match moved {
                Edge::End => self.end = self.start + snapped,
                Edge::Start => self.start = self.end - snapped,
            }
        }
        if keyed {
            self.sync_drag_edges();
        }

        Some(moved)
    }

    fn sync_drag_edges(&mut self) {
        self.drag_start = f64::from(self.start);
        self.drag_end = f64::from(self.end);
    }

    /// Move the zone to the other family, clearing its selection.
    pub fn flip(&mut self, scene: &mut dyn Scene, options: &BlueZoneOptions, animated: bool) {
        self.family = self.family.toggled();
        self.deselect();
        self.render(scene, options);
        if animated {
            self.animate(scene, options);
        }
    }

    /// Primary zones after the first mark their bottom edge, every other
    /// zone its top edge.
    pub fn marks_top_edge(&self) -> bool {
        self.family.is_other() || self.render_index == 0
    }

    pub fn render(&self, scene: &mut dyn Scene, options: &BlueZoneOptions) {
        let color = options.family_color(self.family);
        let view_width = options.view_width;

        scene.set_position(self.shapes.band, Point::new(-view_width, f64::from(self.start)));
        scene.set_size(self.shapes.band, Size::new(view_width * 4.0, f64::from(self.height())));
        scene.set_fill_color(self.shapes.band, Some(color));
        let stroke = self.is_fully_selected().then(|| Stroke::new(color.opaque(), 2.0));
        scene.set_stroke(self.shapes.band, stroke);

        let (fill, tip, base) = if self.marks_top_edge() {
            let tip = f64::from(self.end);
            (MARKER_COLOR, tip, tip - MARKER_HEIGHT)
        } else {
            let tip = f64::from(self.start);
            (Color::WHITE, tip, tip + MARKER_HEIGHT)
        };
        scene.set_fill_color(self.shapes.marker, Some(fill));
        scene.set_path(
            self.shapes.marker,
            vec![
                Point::new(0.0, tip),
                Point::new(-MARKER_HALF_WIDTH, base),
                Point::new(MARKER_HALF_WIDTH, base),
            ],
        );

        let (low, high) = self.range();
        scene.set_position(self.shapes.start_label, Point::new(LABEL_X, f64::from(low) - LABEL_OFFSET));
        scene.set_text(self.shapes.start_label, &low.to_string());
        scene.set_position(self.shapes.end_label, Point::new(LABEL_X, f64::from(high) + LABEL_OFFSET));
        scene.set_text(self.shapes.end_label, &high.to_string());

        let show_labels = options.always_show_labels || self.is_selected();
        scene.set_visible(self.shapes.start_label, show_labels);
        scene.set_visible(self.shapes.end_label, show_labels);
    }

    /// One-shot highlight: an outline that grows, thins and fades out over
    /// 0.8 seconds, then removes itself from the scene.
    pub fn animate(&self, scene: &mut dyn Scene, options: &BlueZoneOptions) {
        let view_width = options.view_width;
        let origin = Point::new(-view_width, f64::from(self.start));
        let size = Size::new(view_width * 4.0, f64::from(self.height()));
        let grown_height = size.height * 1.5;

        let group = scene.append_group(self.container);
        scene.set_position(group, origin);
        scene.set_size(group, size);

        let outline = scene.append_rectangle(Some(group));
        scene.set_size(outline, size);
        scene.set_fill_color(outline, None);
        scene.set_stroke(outline, Some(Stroke::new(options.family_color(self.family).opaque(), 2.0)));

        scene.animate(
            outline,
            Transition::new(HIGHLIGHT_DURATION)
                .easing(easing::ease_out_cubic)
                .stroke_width(1.0)
                .size(Size::new(size.width, grown_height)),
            None,
        );
        scene.animate(
            group,
            Transition::new(HIGHLIGHT_DURATION)
                .easing(easing::ease_out_cubic)
                .opacity(0.0)
                .position(origin.with_y(origin.y - grown_height / 6.0)),
            Some(Box::new(|scene: &mut dyn Scene, id: ShapeId| scene.remove_shape(id))),
        );
    }

    /// Take the zone's shapes out of the scene.
    pub fn remove(&self, scene: &mut dyn Scene) {
        for shape in self.shapes.all() {
            scene.remove_shape(shape);
        }
    }
}

fn snap_to_step(height: i32, step: i32) -> i32 {
    (f64::from(height) / f64::from(step)).round() as i32 * step
}
