#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Model layer for the blue zone editor: geometry, colors, the font info
//! record holding the hinting zones, and the drawing-surface abstraction.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod font_info;
pub use font_info::*;

mod geometry;
pub use geometry::*;

pub mod scene;
pub use scene::{RetainedScene, Scene, ShapeId, ShapeKind, Stroke, TextStyle, Transition};
