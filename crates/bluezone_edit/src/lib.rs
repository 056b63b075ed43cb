#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Interactive blue zone editing.
//!
//! [`BlueZoneTool`] is the tool a glyph editor activates to edit the
//! `postscriptBlueValues` and `postscriptOtherBlues` of a font. It draws the
//! zones into a [`Scene`](bluezone_engine::Scene), reacts to pointer and
//! key events, and writes normalized zone lists back to a [`ZoneDocument`].

mod document;
pub use document::*;

mod font_info_state;
pub use font_info_state::*;

mod host;
pub use host::*;

mod input;
pub use input::*;

mod options;
pub use options::*;

mod session;
pub use session::*;

pub mod undo;
pub use undo::{FontInfoUndoOp, UndoState};

mod zone;
pub use zone::*;
