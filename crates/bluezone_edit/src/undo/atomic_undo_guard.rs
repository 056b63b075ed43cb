//! Atomic undo guard

use std::sync::Arc;

use parking_lot::Mutex;

use super::{FontInfoUndoOp, FontInfoUndoStack};

/// Guard for grouping multiple operations into a single undo step.
///
/// Everything pushed to the stack between creation and [`end`](Self::end)
/// (or drop) is collapsed into one [`FontInfoUndoOp::Atomic`].
#[derive(Debug)]
pub struct AtomicUndoGuard {
    base_count: usize,
    description: String,
    undo_stack: Arc<Mutex<FontInfoUndoStack>>,
}

impl AtomicUndoGuard {
    pub fn new(description: String, undo_stack: Arc<Mutex<FontInfoUndoStack>>) -> Self {
        let base_count = undo_stack.lock().undo_len();
        Self {
            base_count,
            description,
            undo_stack,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// End the atomic undo group explicitly
    pub fn end(&mut self) {
        self.end_action();
    }

    fn end_action(&mut self) {
        let mut stack = self.undo_stack.lock();
        if self.base_count >= stack.undo_len() {
            return;
        }

        let operations = stack.drain_from(self.base_count);
        stack.push_undo(FontInfoUndoOp::Atomic {
            description: self.description.clone(),
            operations,
        });
        self.base_count = usize::MAX;
    }
}

impl Drop for AtomicUndoGuard {
    fn drop(&mut self) {
        self.end_action();
    }
}
