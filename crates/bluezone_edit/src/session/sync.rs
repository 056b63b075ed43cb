use bluezone_engine::{zone_pairs, Scene, ZoneFamily};

use super::BlueZoneTool;
use crate::{Zone, ZoneDocument, ZoneEditScope};

pub(crate) const APPLY_DESCRIPTION: &str = "Zone change";

/// Normalize a set of zone ranges into a flat value list.
///
/// Each range is ordered, the ranges are sorted by their start and
/// overlapping ranges are merged. A range overlaps the running merge when
/// it starts below the merge's end, so touching ranges stay separate.
/// The result holds `[s1, e1, s2, e2, ...]` with strictly increasing starts.
pub fn merge_zone_ranges(ranges: impl IntoIterator<Item = (i32, i32)>) -> Vec<i32> {
    let mut ranges: Vec<(i32, i32)> = ranges.into_iter().map(|(a, b)| (a.min(b), a.max(b))).collect();
    ranges.sort_by_key(|&(start, _)| start);

    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            // equal starts also merge, zero height duplicates included
            Some(last) if start < last.1 || start == last.0 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    merged.into_iter().flat_map(|(start, end)| [start, end]).collect()
}

impl<S: Scene> BlueZoneTool<S> {
    /// Rebuild the zones from the bound document.
    ///
    /// Without a document the tool is left without zones.
    pub fn collect(&mut self) {
        for zone in &self.zones {
            zone.remove(&mut self.scene);
        }
        self.zones.clear();

        let Some(document) = self.document.clone() else {
            return;
        };
        let document = document.lock();

        for family in ZoneFamily::ALL {
            let values = document.zone_values(family);
            if values.len() % 2 != 0 {
                log::warn!("{} has an odd number of values, ignoring trailing {:?}", family.key(), values.last());
            }
            for (index, (start, end)) in zone_pairs(&values).enumerate() {
                self.zones.push(Zone::new(start, end, family, index, &mut self.scene, self.container));
            }
        }
        drop(document);

        log::debug!("collected {} zones", self.zones.len());
        self.render_all();
    }

    /// Write the zones back to the document, merging overlaps per family.
    ///
    /// Both lists are written inside one undo group. The change notification
    /// raised by the write is consumed and does not trigger a collect.
    pub fn apply(&mut self) {
        let Some(document) = self.document.clone() else {
            return;
        };

        self.suppress_reentrant_sync = true;
        let mut document = document.lock();
        {
            let mut scope = ZoneEditScope::begin(&mut *document, APPLY_DESCRIPTION);
            for family in ZoneFamily::ALL {
                let values = merge_zone_ranges(self.zones.iter().filter(|z| z.family() == family).map(Zone::range));
                if let Err(err) = scope.set_zone_values(family, values) {
                    log::error!("Can't write {}: {}", family.key(), err);
                }
            }
        }
        // drain the notification for our own write
        document.take_info_changed();
        drop(document);
        self.suppress_reentrant_sync = false;
    }
}
