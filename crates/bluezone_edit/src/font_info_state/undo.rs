use bluezone_engine::Result;

use super::FontInfoEditState;
use crate::undo::{AtomicUndoGuard, FontInfoUndoOp, FontInfoUndoStack, UndoState};

impl FontInfoEditState {
    /// Begin an atomic undo group
    ///
    /// All operations pushed while the guard is alive are undone/redone together.
    #[must_use]
    pub fn begin_atomic_undo(&mut self, description: impl Into<String>) -> AtomicUndoGuard {
        AtomicUndoGuard::new(description.into(), self.undo_stack.clone())
    }

    /// Push an undo operation and execute it (redo)
    pub(crate) fn push_undo_action(&mut self, op: FontInfoUndoOp) -> Result<()> {
        op.redo(self)?;
        self.push_plain_undo(op);
        Ok(())
    }

    /// Push an undo operation without executing it
    pub(crate) fn push_plain_undo(&mut self, op: FontInfoUndoOp) {
        self.is_dirty = true;
        self.undo_stack.lock().push(op);
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.lock().undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.lock().redo_len()
    }

    /// Mark as saved (clears dirty flag and marks save point in undo stack)
    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
        self.undo_stack.lock().mark_saved();
    }

    /// Snapshot of the undo history, e.g. for session restore
    pub fn undo_stack(&self) -> FontInfoUndoStack {
        self.undo_stack.lock().clone()
    }

    fn update_dirty_flag(&mut self) {
        self.is_dirty = !self.undo_stack.lock().is_at_save_point();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for FontInfoEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.lock().undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.lock().can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.lock().pop_undo() else {
            return Ok(());
        };

        let result = op.undo(self);
        self.undo_stack.lock().push_redo(op);
        self.update_dirty_flag();
        result
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.lock().redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.lock().can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.lock().pop_redo() else {
            return Ok(());
        };

        let result = op.redo(self);
        self.undo_stack.lock().push_undo(op);
        self.update_dirty_flag();
        result
    }
}
