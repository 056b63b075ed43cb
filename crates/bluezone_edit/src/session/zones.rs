use bluezone_engine::{Point, Scene, ZoneFamily};

use super::BlueZoneTool;
use crate::Zone;

impl<S: Scene> BlueZoneTool<S> {
    /// Select the zone edge closest to `point`, if any lies closer than
    /// `max_distance`.
    ///
    /// Unless `keep_selection` is set every zone is deselected first. Ties go
    /// to the zone that comes first. Returns `false` when nothing was hit or
    /// no document is bound.
    pub fn select_closest_zone_edge(&mut self, point: Point, keep_selection: bool, max_distance: f64) -> bool {
        if self.document.is_none() {
            return false;
        }

        let mut closest = None;
        let mut closest_distance = max_distance;
        for (index, zone) in self.zones.iter_mut().enumerate() {
            if !keep_selection {
                zone.deselect();
                zone.render(&mut self.scene, &self.options);
            }
            let distance = zone.distance(point.y);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(index);
            }
        }

        let Some(index) = closest else {
            return false;
        };
        let zone = &mut self.zones[index];
        zone.select(point);
        zone.render(&mut self.scene, &self.options);
        true
    }

    /// Add a zone with both edges selected and play its highlight.
    ///
    /// Refused, returning `false`, when the family is full or no document
    /// is bound.
    pub fn add_zone(&mut self, start: i32, end: i32, family: ZoneFamily) -> bool {
        if self.document.is_none() {
            return false;
        }
        let count = self.count_zones(family);
        if count >= self.options.zone_limit {
            log::info!("{} already holds {} zones, not adding another", family.key(), count);
            return false;
        }

        let mut zone = Zone::new(start, end, family, count + 1, &mut self.scene, self.container);
        zone.select_both(0.0);
        zone.render(&mut self.scene, &self.options);
        zone.animate(&mut self.scene, &self.options);
        self.zones.push(zone);
        true
    }

    /// Delete every zone with a selected edge and write the rest back.
    pub fn remove_selected_zones(&mut self) {
        let (removed, kept): (Vec<Zone>, Vec<Zone>) = std::mem::take(&mut self.zones).into_iter().partition(Zone::is_selected);
        for zone in &removed {
            zone.remove(&mut self.scene);
        }
        self.zones = kept;
        log::debug!("removed {} zones", removed.len());
        self.apply();
    }

    pub fn count_zones(&self, family: ZoneFamily) -> usize {
        self.zones.iter().filter(|z| z.family() == family).count()
    }
}
