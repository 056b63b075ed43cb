use bluezone_engine::{Result, ZoneFamily};
use serde::{Deserialize, Serialize};

use crate::FontInfoEditState;

/// Serializable undo operation for font info editing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FontInfoUndoOp {
    /// Atomic group of operations
    Atomic { description: String, operations: Vec<FontInfoUndoOp> },

    /// Replace the flat value list of one zone family
    SetZoneValues { family: ZoneFamily, old: Vec<i32>, new: Vec<i32> },
}

impl FontInfoUndoOp {
    pub fn get_description(&self) -> String {
        match self {
            FontInfoUndoOp::Atomic { description, .. } => description.clone(),
            FontInfoUndoOp::SetZoneValues { family, .. } => format!("Change {}", family.key()),
        }
    }

    pub fn undo(&self, state: &mut FontInfoEditState) -> Result<()> {
        match self {
            FontInfoUndoOp::Atomic { operations, .. } => {
                for op in operations.iter().rev() {
                    op.undo(state)?;
                }
                Ok(())
            }

            FontInfoUndoOp::SetZoneValues { family, old, .. } => {
                state.set_zone_values_internal(*family, old.clone());
                Ok(())
            }
        }
    }

    pub fn redo(&self, state: &mut FontInfoEditState) -> Result<()> {
        match self {
            FontInfoUndoOp::Atomic { operations, .. } => {
                for op in operations {
                    op.redo(state)?;
                }
                Ok(())
            }

            FontInfoUndoOp::SetZoneValues { family, new, .. } => {
                state.set_zone_values_internal(*family, new.clone());
                Ok(())
            }
        }
    }
}
