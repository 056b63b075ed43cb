//! Tests for a single zone: selection, movement and its shapes in the scene

mod rendering;
mod selection;
