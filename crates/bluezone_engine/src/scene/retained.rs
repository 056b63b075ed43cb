use std::collections::HashMap;
use std::time::Duration;

use crate::{Color, EngineError, Point, Result, Size};

use super::{AnimatedProperty, AnimationFinished, DisplayItem, DisplayList, EasingFn, Scene, ShapeId, ShapeKind, Stroke, TextStyle, Transition};

/// State of a single shape in a [`RetainedScene`]
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeNode {
    pub kind: ShapeKind,
    pub parent: Option<ShapeId>,
    pub children: Vec<ShapeId>,
    pub position: Point,
    pub size: Size,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub path: Vec<Point>,
    pub text: String,
    pub text_style: TextStyle,
    pub visible: bool,
    pub opacity: f64,
}

impl ShapeNode {
    fn new(kind: ShapeKind, parent: Option<ShapeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            position: Point::default(),
            size: Size::default(),
            fill: None,
            stroke: None,
            path: Vec::new(),
            text: String::new(),
            text_style: TextStyle::default(),
            visible: true,
            opacity: 1.0,
        }
    }

    fn current_value(&self, target: &AnimatedProperty) -> AnimatedProperty {
        match target {
            AnimatedProperty::Position(_) => AnimatedProperty::Position(self.position),
            AnimatedProperty::Size(_) => AnimatedProperty::Size(self.size),
            AnimatedProperty::Opacity(_) => AnimatedProperty::Opacity(self.opacity),
            AnimatedProperty::StrokeWidth(_) => AnimatedProperty::StrokeWidth(self.stroke.map_or(0.0, |s| s.width)),
        }
    }

    fn interpolate(&mut self, from: AnimatedProperty, to: AnimatedProperty, t: f64) {
        match (from, to) {
            (AnimatedProperty::Position(a), AnimatedProperty::Position(b)) => self.position = a.lerp(b, t),
            (AnimatedProperty::Size(a), AnimatedProperty::Size(b)) => self.size = a.lerp(b, t),
            (AnimatedProperty::Opacity(a), AnimatedProperty::Opacity(b)) => self.opacity = a + (b - a) * t,
            (AnimatedProperty::StrokeWidth(a), AnimatedProperty::StrokeWidth(b)) => {
                if let Some(stroke) = &mut self.stroke {
                    stroke.width = a + (b - a) * t;
                }
            }
            _ => {}
        }
    }
}

struct RunningAnimation {
    shape: ShapeId,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
    from: Vec<AnimatedProperty>,
    to: Vec<AnimatedProperty>,
    on_finished: Option<AnimationFinished>,
}

impl RunningAnimation {
    fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

/// In-memory scene graph.
///
/// Time only moves when [`advance`](RetainedScene::advance) is called, which
/// makes animations deterministic for headless hosts and tests.
#[derive(Default)]
pub struct RetainedScene {
    next_id: u64,
    nodes: HashMap<ShapeId, ShapeNode>,
    roots: Vec<ShapeId>,
    animations: Vec<RunningAnimation>,
}

impl std::fmt::Debug for RetainedScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetainedScene")
            .field("shapes", &self.nodes.len())
            .field("roots", &self.roots.len())
            .field("animations", &self.animations.len())
            .finish()
    }
}

impl RetainedScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: ShapeId) -> Option<&ShapeNode> {
        self.nodes.get(&id)
    }

    /// # Errors
    ///
    /// Returns [`EngineError::UnknownShape`] for removed or foreign ids.
    pub fn shape(&self, id: ShapeId) -> Result<&ShapeNode> {
        self.nodes.get(&id).ok_or(EngineError::UnknownShape(id))
    }

    pub fn shape_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    pub fn running_animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn is_animating(&self, id: ShapeId) -> bool {
        self.animations.iter().any(|a| a.shape == id)
    }

    /// Move the animation clock forward.
    ///
    /// Finished transitions snap to their targets and fire their completion
    /// callbacks after all animations have been stepped.
    pub fn advance(&mut self, dt: Duration) {
        let mut finished = Vec::new();
        for mut animation in std::mem::take(&mut self.animations) {
            animation.elapsed += dt;
            let Some(node) = self.nodes.get_mut(&animation.shape) else {
                continue;
            };
            let raw = animation.progress();
            let t = (animation.easing)(raw);
            for (from, to) in animation.from.iter().zip(animation.to.iter()) {
                node.interpolate(*from, *to, t);
            }
            if raw >= 1.0 {
                finished.push(animation);
            } else {
                self.animations.push(animation);
            }
        }

        for animation in finished {
            if let Some(on_finished) = animation.on_finished {
                on_finished(self, animation.shape);
            }
        }
    }

    /// Resolve the tree into absolute drawing commands, parents before children.
    pub fn display_list(&self) -> DisplayList {
        let mut list = DisplayList::new();
        for id in &self.roots {
            self.collect_items(*id, Point::default(), 1.0, &mut list);
        }
        list
    }

    fn collect_items(&self, id: ShapeId, offset: Point, opacity: f64, list: &mut DisplayList) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        if !node.visible {
            return;
        }
        let origin = Point::new(offset.x + node.position.x, offset.y + node.position.y);
        let opacity = opacity * node.opacity;

        match node.kind {
            ShapeKind::Group => {}
            ShapeKind::Rectangle => list.push(DisplayItem::Rect {
                origin,
                size: node.size,
                fill: node.fill,
                stroke: node.stroke,
                opacity,
            }),
            ShapeKind::Path => list.push(DisplayItem::Polygon {
                points: node.path.iter().map(|p| Point::new(p.x + origin.x, p.y + origin.y)).collect(),
                fill: node.fill,
                stroke: node.stroke,
                opacity,
            }),
            ShapeKind::TextLine => list.push(DisplayItem::Text {
                position: origin,
                text: node.text.clone(),
                style: node.text_style,
                fill: node.fill,
                opacity,
            }),
        }

        for child in &node.children {
            self.collect_items(*child, origin, opacity, list);
        }
    }

    fn node_mut(&mut self, id: ShapeId) -> Option<&mut ShapeNode> {
        let node = self.nodes.get_mut(&id);
        if node.is_none() {
            log::debug!("ignoring update of removed shape {:?}", id);
        }
        node
    }

    fn collect_subtree(&self, id: ShapeId, out: &mut Vec<ShapeId>) {
        if let Some(node) = self.nodes.get(&id) {
            out.push(id);
            for child in &node.children {
                self.collect_subtree(*child, out);
            }
        }
    }
}

impl Scene for RetainedScene {
    fn append_shape(&mut self, kind: ShapeKind, parent: Option<ShapeId>) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId(self.next_id);

        let parent = parent.filter(|p| self.nodes.contains_key(p));
        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(&p) {
                    parent_node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        self.nodes.insert(id, ShapeNode::new(kind, parent));
        id
    }

    fn remove_shape(&mut self, id: ShapeId) {
        let mut removed = Vec::new();
        self.collect_subtree(id, &mut removed);
        if removed.is_empty() {
            return;
        }

        let parent = self.nodes.get(&id).and_then(|n| n.parent);
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }

        for shape in &removed {
            self.nodes.remove(shape);
        }
        self.animations.retain(|a| !removed.contains(&a.shape));
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.animations.clear();
    }

    fn contains(&self, id: ShapeId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn set_position(&mut self, id: ShapeId, position: Point) {
        if let Some(node) = self.node_mut(id) {
            node.position = position;
        }
    }

    fn position(&self, id: ShapeId) -> Option<Point> {
        self.nodes.get(&id).map(|n| n.position)
    }

    fn set_size(&mut self, id: ShapeId, size: Size) {
        if let Some(node) = self.node_mut(id) {
            node.size = size;
        }
    }

    fn size(&self, id: ShapeId) -> Option<Size> {
        self.nodes.get(&id).map(|n| n.size)
    }

    fn set_fill_color(&mut self, id: ShapeId, color: Option<Color>) {
        if let Some(node) = self.node_mut(id) {
            node.fill = color;
        }
    }

    fn set_stroke(&mut self, id: ShapeId, stroke: Option<Stroke>) {
        if let Some(node) = self.node_mut(id) {
            node.stroke = stroke;
        }
    }

    fn set_path(&mut self, id: ShapeId, points: Vec<Point>) {
        if let Some(node) = self.node_mut(id) {
            node.path = points;
        }
    }

    fn set_text(&mut self, id: ShapeId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.to_string();
        }
    }

    fn set_text_style(&mut self, id: ShapeId, style: TextStyle) {
        if let Some(node) = self.node_mut(id) {
            node.text_style = style;
        }
    }

    fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(node) = self.node_mut(id) {
            node.visible = visible;
        }
    }

    fn set_opacity(&mut self, id: ShapeId, opacity: f64) {
        if let Some(node) = self.node_mut(id) {
            node.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    fn animate(&mut self, id: ShapeId, transition: Transition, on_finished: Option<AnimationFinished>) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let from = transition.targets.iter().map(|t| node.current_value(t)).collect();
        self.animations.push(RunningAnimation {
            shape: id,
            elapsed: Duration::ZERO,
            duration: transition.duration,
            easing: transition.easing,
            from,
            to: transition.targets,
            on_finished,
        });
    }
}
