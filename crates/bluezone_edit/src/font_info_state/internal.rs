//! Internal setters for the font info editor
//!
//! Called by undo operations to modify state without creating new undo
//! entries.

use bluezone_engine::ZoneFamily;

use super::FontInfoEditState;

impl FontInfoEditState {
    /// Set a zone list (internal, no undo)
    pub(crate) fn set_zone_values_internal(&mut self, family: ZoneFamily, values: Vec<i32>) {
        self.info.set_zone_values(family, values);
        self.info_changed = true;
        self.is_dirty = true;
    }
}
