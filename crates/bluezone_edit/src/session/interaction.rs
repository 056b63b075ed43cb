use bluezone_engine::{Point, Scene, Vector, ZoneFamily};

use super::BlueZoneTool;
use crate::{Key, KeyEvent, Modifiers, Zone};

impl<S: Scene> BlueZoneTool<S> {
    /// Pointer pressed at `point` in glyph coordinates.
    ///
    /// A double click flips every zone under the pointer, or adds a new zone
    /// centered on it when there is none. A single click selects the nearest
    /// edge, falling back to both edges of every zone under the pointer.
    pub fn on_pointer_down(&mut self, point: Point, click_count: u32) {
        if !self.is_active {
            return;
        }
        let y = point.y.round();

        match click_count {
            2 => {
                let mut flipped = false;
                for zone in self.zones.iter_mut().filter(|z| z.point_inside(y)) {
                    zone.flip(&mut self.scene, &self.options, true);
                    flipped = true;
                }
                if !flipped {
                    let center = y as i32;
                    let half_height = self.options.new_zone_height / 2;
                    self.add_zone(center - half_height, center + half_height, ZoneFamily::Primary);
                }
            }
            1 => {
                let hit_distance = self.options.edge_hit_distance;
                if !self.select_closest_zone_edge(point, false, hit_distance) {
                    for zone in self.zones.iter_mut().filter(|z| z.point_inside(y)) {
                        zone.select_both(point.x);
                        zone.render(&mut self.scene, &self.options);
                    }
                }
            }
            _ => {}
        }
    }

    /// Pointer moved by `delta` with the button held; moves selected edges.
    pub fn on_pointer_dragged(&mut self, _point: Point, delta: Vector, modifiers: Modifiers) {
        if !self.is_active {
            return;
        }
        for zone in self.zones.iter_mut().filter(|z| z.is_selected()) {
            zone.move_selection(delta, false, modifiers, &mut self.scene, &self.options);
        }
    }

    pub fn on_pointer_up(&mut self, _point: Point) {
        if !self.is_active {
            return;
        }
        if self.has_selection() {
            self.apply();
        }
    }

    /// Arrow keys nudge the selected zones by 1 unit, 10 with shift. Delete
    /// removes them and return moves them to the other family.
    pub fn on_key_down(&mut self, event: KeyEvent) {
        if !self.is_active {
            return;
        }

        let step = if event.modifiers.shift() { 10.0 } else { 1.0 };
        let nudge = match event.key {
            Key::ArrowUp => Some(step),
            Key::ArrowDown => Some(-step),
            _ => None,
        };
        if let Some(amount) = nudge {
            for zone in self.zones.iter_mut().filter(|z| z.is_selected()) {
                zone.move_selection(Vector::new(0.0, amount), true, event.modifiers, &mut self.scene, &self.options);
            }
        }

        match event.key {
            Key::Delete => self.remove_selected_zones(),
            Key::Return => {
                for zone in self.zones.iter_mut().filter(|z| z.is_selected()) {
                    zone.flip(&mut self.scene, &self.options, false);
                }
            }
            _ => {}
        }
    }

    pub fn selected_zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(|z| z.is_selected())
    }
}
