//! Undo/redo building blocks for font info editing
//!
//! - `operation.rs` - Serializable undo operation enum
//! - `stack.rs` - Undo/redo stacks and the [`UndoState`] trait
//! - `atomic_undo_guard.rs` - Groups several operations into one undo step

mod atomic_undo_guard;
mod operation;
mod stack;

pub use atomic_undo_guard::AtomicUndoGuard;
pub use operation::FontInfoUndoOp;
pub use stack::{FontInfoUndoStack, UndoState};
