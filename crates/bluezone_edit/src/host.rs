//! What the zone tool needs from the application hosting it

use serde::{Deserialize, Serialize};

use crate::SharedDocument;

/// The glyph view's own rendering of blue zones, hidden while the tool is
/// active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueDisplaySettings {
    pub blues: bool,
    pub family_blues: bool,
}

impl Default for BlueDisplaySettings {
    fn default() -> Self {
        Self { blues: true, family_blues: true }
    }
}

impl BlueDisplaySettings {
    pub const HIDDEN: BlueDisplaySettings = BlueDisplaySettings {
        blues: false,
        family_blues: false,
    };
}

pub trait ToolHost {
    /// The document shown in the glyph view, if any.
    fn current_document(&self) -> Option<SharedDocument>;

    fn display_settings(&self) -> BlueDisplaySettings;
    fn set_display_settings(&mut self, settings: BlueDisplaySettings);
}

/// Host without a user interface, used by the replay tool and tests.
#[derive(Default)]
pub struct StandaloneHost {
    document: Option<SharedDocument>,
    display_settings: BlueDisplaySettings,
}

impl StandaloneHost {
    pub fn new(document: Option<SharedDocument>) -> Self {
        Self {
            document,
            display_settings: BlueDisplaySettings::default(),
        }
    }

    pub fn set_current_document(&mut self, document: Option<SharedDocument>) {
        self.document = document;
    }
}

impl ToolHost for StandaloneHost {
    fn current_document(&self) -> Option<SharedDocument> {
        self.document.clone()
    }

    fn display_settings(&self) -> BlueDisplaySettings {
        self.display_settings
    }

    fn set_display_settings(&mut self, settings: BlueDisplaySettings) {
        self.display_settings = settings;
    }
}
