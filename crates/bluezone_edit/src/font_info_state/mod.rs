//! Editable font info document
//!
//! - `state.rs` - Struct definition, constructors, file handling
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Internal setters for undo operations
//! - `document.rs` - [`ZoneDocument`](crate::ZoneDocument) implementation

mod document;
mod internal;
mod state;
mod undo;

pub use state::FontInfoEditState;
