use bluezone_engine::Result;
use serde::{Deserialize, Serialize};

use super::FontInfoUndoOp;

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    fn can_undo(&self) -> bool;

    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    fn can_redo(&self) -> bool;

    fn redo(&mut self) -> Result<()>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FontInfoUndoStack {
    undo: Vec<FontInfoUndoOp>,
    redo: Vec<FontInfoUndoOp>,
    /// Undo depth at the last save, `None` once that state became unreachable
    save_point: Option<usize>,
}

impl FontInfoUndoStack {
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            save_point: Some(0),
        }
    }

    /// Push a new user operation. Invalidates the redo stack.
    pub fn push(&mut self, op: FontInfoUndoOp) {
        if self.save_point.is_some_and(|p| p > self.undo.len()) {
            self.save_point = None;
        }
        self.undo.push(op);
        self.redo.clear();
    }

    pub fn pop_undo(&mut self) -> Option<FontInfoUndoOp> {
        self.undo.pop()
    }

    pub fn push_undo(&mut self, op: FontInfoUndoOp) {
        self.undo.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<FontInfoUndoOp> {
        self.redo.pop()
    }

    pub fn push_redo(&mut self, op: FontInfoUndoOp) {
        self.redo.push(op);
    }

    /// Remove every undo operation from `base` on, oldest first.
    pub fn drain_from(&mut self, base: usize) -> Vec<FontInfoUndoOp> {
        if base >= self.undo.len() {
            return Vec::new();
        }
        self.undo.split_off(base)
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo.last().map(FontInfoUndoOp::get_description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo.last().map(FontInfoUndoOp::get_description)
    }

    pub fn mark_saved(&mut self) {
        self.save_point = Some(self.undo.len());
    }

    pub fn is_at_save_point(&self) -> bool {
        self.save_point == Some(self.undo.len())
    }
}
