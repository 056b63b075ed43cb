//! Flattened drawing commands
//!
//! [`RetainedScene::display_list`](super::RetainedScene::display_list)
//! resolves the shape tree (group offsets, inherited opacity, visibility)
//! into a list of [`DisplayItem`]s a backend can paint in order.

use crate::{Color, Point, Size};

use super::{Stroke, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    /// Rectangle with its origin at the bottom-left corner.
    Rect {
        origin: Point,
        size: Size,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        opacity: f64,
    },

    /// Closed polygon in absolute coordinates.
    Polygon {
        points: Vec<Point>,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        opacity: f64,
    },

    Text {
        position: Point,
        text: String,
        style: TextStyle,
        fill: Option<Color>,
        opacity: f64,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    pub fn new() -> Self {
        DisplayList { items: Vec::new() }
    }

    pub fn push(&mut self, item: DisplayItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            DisplayItem::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &DisplayItem> {
        self.items.iter().filter(|item| matches!(item, DisplayItem::Rect { .. }))
    }
}
