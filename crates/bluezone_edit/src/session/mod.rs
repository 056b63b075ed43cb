//! The blue zone editing tool
//!
//! Split into multiple files:
//! - `mod.rs` - Struct definition, activation and document binding
//! - `interaction.rs` - Pointer and keyboard handling
//! - `zones.rs` - Hit-testing, adding and removing zones
//! - `sync.rs` - Collect (document to zones) and apply (zones to document)
//!
//! # Lifecycle
//!
//! The tool starts inactive. [`activate`](BlueZoneTool::activate) hides the
//! host's own zone display, creates the overlay group in the scene and
//! collects the zones of the current document. While active the host
//! forwards pointer and key events. [`deactivate`](BlueZoneTool::deactivate)
//! restores the display settings, drops the overlay and writes pending
//! edits back.
//!
//! Zones are only written back once a gesture is complete: on pointer up,
//! after a delete, on a document switch and on deactivation.

mod interaction;
mod sync;
mod zones;

pub use sync::merge_zone_ranges;

use bluezone_engine::{Scene, ShapeId};

use crate::{same_document, BlueDisplaySettings, BlueZoneOptions, SharedDocument, ToolHost, Zone};

pub struct BlueZoneTool<S: Scene> {
    scene: S,
    options: BlueZoneOptions,
    zones: Vec<Zone>,
    document: Option<SharedDocument>,
    /// Overlay group holding every zone shape, present while active
    container: Option<ShapeId>,
    saved_display_settings: Option<BlueDisplaySettings>,
    /// Set while the tool writes to the document itself
    suppress_reentrant_sync: bool,
    is_active: bool,
}

impl<S: Scene> BlueZoneTool<S> {
    pub const IDENTIFIER: &'static str = "blue_zones";
    pub const TOOLBAR_TIP: &'static str = "Blue Zones";

    pub fn new(scene: S, options: BlueZoneOptions) -> Self {
        Self {
            scene,
            options,
            zones: Vec::new(),
            document: None,
            container: None,
            saved_display_settings: None,
            suppress_reentrant_sync: false,
            is_active: false,
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn options(&self) -> &BlueZoneOptions {
        &self.options
    }

    /// Replace the options and redraw every zone with them.
    pub fn set_options(&mut self, options: BlueZoneOptions) {
        self.options = options;
        self.render_all();
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn document(&self) -> Option<&SharedDocument> {
        self.document.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn has_selection(&self) -> bool {
        self.zones.iter().any(Zone::is_selected)
    }

    pub fn activate(&mut self, host: &mut dyn ToolHost) {
        if self.is_active {
            log::warn!("blue zone tool activated twice");
            return;
        }
        log::debug!("activating blue zone tool");

        self.saved_display_settings = Some(host.display_settings());
        host.set_display_settings(BlueDisplaySettings::HIDDEN);

        self.container = Some(self.scene.append_group(None));
        self.is_active = true;
        self.document = host.current_document();
        self.collect();
    }

    pub fn deactivate(&mut self, host: &mut dyn ToolHost) {
        if !self.is_active {
            return;
        }
        log::debug!("deactivating blue zone tool");

        if let Some(settings) = self.saved_display_settings.take() {
            host.set_display_settings(settings);
        }
        if let Some(container) = self.container.take() {
            self.scene.remove_shape(container);
        }
        if self.document.is_some() {
            self.apply();
        }

        self.zones.clear();
        self.document = None;
        self.is_active = false;
    }

    /// The host switched documents; pending edits go to the old one first.
    pub fn on_document_became_current(&mut self, host: &dyn ToolHost) {
        if !self.is_active {
            return;
        }
        let current = host.current_document();
        if !same_document(self.document.as_ref(), current.as_ref()) {
            if self.document.is_some() {
                self.apply();
            }
            self.document = current;
        }
        self.collect();
    }

    /// The document's info record changed, possibly by undo or another tool.
    pub fn on_document_info_changed(&mut self) {
        if !self.is_active || self.suppress_reentrant_sync {
            return;
        }
        self.collect();
    }

    fn render_all(&mut self) {
        for zone in &self.zones {
            zone.render(&mut self.scene, &self.options);
        }
    }
}
