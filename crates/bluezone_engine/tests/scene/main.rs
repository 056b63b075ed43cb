//! Tests for the retained scene
//!
//! These tests verify that:
//! 1. The shape tree is maintained on append/remove
//! 2. The display list resolves group offsets, opacity and visibility
//! 3. Animations interpolate and fire their completion callbacks once

mod animation_tests;
mod shape_tree_tests;
