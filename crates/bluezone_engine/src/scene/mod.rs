//! Drawing surface abstraction
//!
//! The zone editor never draws directly. It appends shapes to a [`Scene`],
//! updates their properties, and asks the scene to animate them. A host
//! backs the trait with its own layer tree; [`RetainedScene`] is an
//! in-memory implementation that keeps the shape tree, drives animations on
//! [`RetainedScene::advance`] and exports a flat display list.
//!
//! Shape coordinates are glyph-space font units. Children of a group are
//! positioned relative to the group.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Color, Point, Size};

pub mod easing;
pub use easing::EasingFn;

mod display_list;
pub use display_list::*;

mod retained;
pub use retained::*;

/// Handle to a shape owned by a scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Invisible container, only carries position/opacity for its children
    Group,
    Rectangle,
    /// Closed polygon
    Path,
    TextLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlignment {
    #[default]
    Baseline,
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub point_size: f64,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            point_size: 12.0,
            horizontal: HorizontalAlignment::Left,
            vertical: VerticalAlignment::Baseline,
        }
    }
}

/// Target value of one animated property
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatedProperty {
    Position(Point),
    Size(Size),
    Opacity(f64),
    StrokeWidth(f64),
}

/// A group of property changes that run together over `duration`
#[derive(Clone, Debug)]
pub struct Transition {
    pub duration: Duration,
    pub easing: EasingFn,
    pub targets: Vec<AnimatedProperty>,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: easing::linear,
            targets: Vec::new(),
        }
    }

    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.targets.push(AnimatedProperty::Position(position));
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.targets.push(AnimatedProperty::Size(size));
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.targets.push(AnimatedProperty::Opacity(opacity));
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.targets.push(AnimatedProperty::StrokeWidth(width));
        self
    }
}

/// Called once when a transition has run to completion.
pub type AnimationFinished = Box<dyn FnOnce(&mut dyn Scene, ShapeId)>;

/// Capability interface of a host drawing surface.
///
/// Setters on a shape that no longer exists are ignored.
pub trait Scene {
    /// Append a new shape, at the root when `parent` is `None`.
    fn append_shape(&mut self, kind: ShapeKind, parent: Option<ShapeId>) -> ShapeId;

    /// Remove a shape together with its children and running animations.
    fn remove_shape(&mut self, id: ShapeId);

    /// Remove every shape.
    fn clear(&mut self);

    fn contains(&self, id: ShapeId) -> bool;

    fn set_position(&mut self, id: ShapeId, position: Point);
    fn position(&self, id: ShapeId) -> Option<Point>;

    fn set_size(&mut self, id: ShapeId, size: Size);
    fn size(&self, id: ShapeId) -> Option<Size>;

    fn set_fill_color(&mut self, id: ShapeId, color: Option<Color>);
    fn set_stroke(&mut self, id: ShapeId, stroke: Option<Stroke>);

    /// Replace the outline of a path shape with a closed polygon.
    fn set_path(&mut self, id: ShapeId, points: Vec<Point>);

    fn set_text(&mut self, id: ShapeId, text: &str);
    fn set_text_style(&mut self, id: ShapeId, style: TextStyle);

    fn set_visible(&mut self, id: ShapeId, visible: bool);
    fn set_opacity(&mut self, id: ShapeId, opacity: f64);

    /// Start animating `id` from its current values to the transition targets.
    fn animate(&mut self, id: ShapeId, transition: Transition, on_finished: Option<AnimationFinished>);

    fn append_group(&mut self, parent: Option<ShapeId>) -> ShapeId {
        self.append_shape(ShapeKind::Group, parent)
    }

    fn append_rectangle(&mut self, parent: Option<ShapeId>) -> ShapeId {
        self.append_shape(ShapeKind::Rectangle, parent)
    }

    fn append_path(&mut self, parent: Option<ShapeId>) -> ShapeId {
        self.append_shape(ShapeKind::Path, parent)
    }

    fn append_text_line(&mut self, parent: Option<ShapeId>) -> ShapeId {
        self.append_shape(ShapeKind::TextLine, parent)
    }
}
