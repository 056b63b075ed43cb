//! Font info edit state
//!
//! Wraps a [`FontInfo`] record with an undo stack, a dirty flag and the
//! "info changed" notification the zone tool listens to.
//!
//! ## Undo/Redo System
//!
//! All modifications go through the undo system:
//! - Single writes push one item to the undo stack
//! - Grouped writes use `begin_atomic_undo()` and land as one atomic step
//! - Writes that don't change the stored values are dropped

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bluezone_engine::{EngineError, FontInfo, Result, ZoneFamily};
use parking_lot::Mutex;

use crate::undo::{AtomicUndoGuard, FontInfoUndoOp, FontInfoUndoStack};

#[derive(Debug)]
pub struct FontInfoEditState {
    pub(crate) info: FontInfo,
    pub(crate) undo_stack: Arc<Mutex<FontInfoUndoStack>>,
    /// Groups opened through the document interface, innermost last
    pub(crate) open_groups: Vec<AtomicUndoGuard>,
    pub(crate) info_changed: bool,
    pub(crate) is_dirty: bool,
    file_path: Option<PathBuf>,
}

impl Default for FontInfoEditState {
    fn default() -> Self {
        Self::new(FontInfo::default())
    }
}

impl FontInfoEditState {
    pub fn new(info: FontInfo) -> Self {
        Self {
            info,
            undo_stack: Arc::new(Mutex::new(FontInfoUndoStack::new())),
            open_groups: Vec::new(),
            info_changed: false,
            is_dirty: false,
            file_path: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let info = FontInfo::load(path)?;
        let mut state = Self::new(info);
        state.file_path = Some(path.to_path_buf());
        Ok(state)
    }

    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Save to the file the state was loaded from.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.file_path.clone() else {
            return Err(EngineError::WriteFile {
                path: PathBuf::new(),
                message: "document has no file name".to_string(),
            });
        };
        self.save_as(&path)
    }

    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.info.save(path)?;
        self.file_path = Some(path.to_path_buf());
        self.mark_saved();
        Ok(())
    }

    pub fn zone_values(&self, family: ZoneFamily) -> &[i32] {
        self.info.zone_values(family)
    }

    /// Replace one zone list as an undoable operation.
    ///
    /// # Errors
    ///
    /// Odd-length lists are rejected before anything is written.
    pub fn set_zone_values(&mut self, family: ZoneFamily, values: Vec<i32>) -> Result<()> {
        if values.len() % 2 != 0 {
            return Err(EngineError::OddZoneValueCount { family, len: values.len() });
        }
        let old = self.info.zone_values(family).to_vec();
        if old == values {
            return Ok(());
        }
        self.push_undo_action(FontInfoUndoOp::SetZoneValues { family, old, new: values })
    }

    /// Returns `true` if the info record changed since the last call.
    pub fn take_info_changed(&mut self) -> bool {
        std::mem::take(&mut self.info_changed)
    }
}
