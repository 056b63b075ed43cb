use bluezone_engine::{Result, ZoneFamily};

use super::FontInfoEditState;
use crate::ZoneDocument;

impl ZoneDocument for FontInfoEditState {
    fn zone_values(&self, family: ZoneFamily) -> Vec<i32> {
        self.info.zone_values(family).to_vec()
    }

    fn set_zone_values(&mut self, family: ZoneFamily, values: Vec<i32>) -> Result<()> {
        FontInfoEditState::set_zone_values(self, family, values)
    }

    fn begin_undo_group(&mut self, description: &str) {
        let guard = self.begin_atomic_undo(description);
        self.open_groups.push(guard);
    }

    fn end_undo_group(&mut self) {
        if self.open_groups.pop().is_none() {
            log::warn!("end_undo_group without a matching begin_undo_group");
        }
    }

    fn take_info_changed(&mut self) -> bool {
        FontInfoEditState::take_info_changed(self)
    }
}
