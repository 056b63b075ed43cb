//! Recorded editing sessions
//!
//! A script is a TOML file with a list of `[[event]]` tables:
//!
//! ```toml
//! [[event]]
//! type = "pointer_down"
//! y = 498
//!
//! [[event]]
//! type = "pointer_dragged"
//! dy = -4
//!
//! [[event]]
//! type = "pointer_up"
//!
//! [[event]]
//! type = "key"
//! key = "up"
//! shift = true
//! ```

use std::{path::Path, sync::Arc, time::Duration};

use anyhow::Context;
use bluezone_edit::{BlueZoneOptions, BlueZoneTool, FontInfoEditState, Key, KeyEvent, Modifiers, SharedDocument, StandaloneHost, UndoState};
use bluezone_engine::{Point, RetainedScene, Vector};
use parking_lot::Mutex;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    /// Native character code, e.g. 63232 for the up arrow
    Code(u32),
    Name(String),
}

impl KeySpec {
    fn to_key(&self) -> anyhow::Result<Key> {
        match self {
            KeySpec::Code(code) => Ok(Key::from_char_code(*code)),
            KeySpec::Name(name) => match name.to_ascii_lowercase().as_str() {
                "up" => Ok(Key::ArrowUp),
                "down" => Ok(Key::ArrowDown),
                "delete" | "backspace" => Ok(Key::Delete),
                "return" | "enter" => Ok(Key::Return),
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => Ok(Key::Character(ch)),
                        _ => Err(anyhow::anyhow!("unknown key '{name}'")),
                    }
                }
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        #[serde(default)]
        x: f64,
        y: f64,
        #[serde(default = "default_clicks")]
        clicks: u32,
    },
    PointerDragged {
        #[serde(default)]
        dx: f64,
        dy: f64,
        #[serde(default)]
        shift: bool,
    },
    PointerUp,
    Key {
        key: KeySpec,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
    },
    /// Let running animations progress
    Advance { ms: u64 },
    Apply,
    Undo,
    Redo,
}

fn default_clicks() -> u32 {
    1
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid replay script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("can't read script {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

/// Drives a [`BlueZoneTool`] over a document the way an editor would.
pub struct Replay {
    pub document: Arc<Mutex<FontInfoEditState>>,
    pub host: StandaloneHost,
    pub tool: BlueZoneTool<RetainedScene>,
    pointer: Point,
}

impl Replay {
    pub fn new(document: FontInfoEditState, options: BlueZoneOptions) -> Self {
        let document = Arc::new(Mutex::new(document));
        let shared: SharedDocument = document.clone();
        Self {
            document,
            host: StandaloneHost::new(Some(shared)),
            tool: BlueZoneTool::new(RetainedScene::new(), options),
            pointer: Point::default(),
        }
    }

    pub fn start(&mut self) {
        self.tool.activate(&mut self.host);
    }

    pub fn finish(&mut self) {
        self.tool.deactivate(&mut self.host);
    }

    pub fn run(&mut self, script: &Script) -> anyhow::Result<()> {
        for (index, event) in script.events.iter().enumerate() {
            self.dispatch(event).with_context(|| format!("event #{} ({event:?})", index + 1))?;
        }
        Ok(())
    }

    pub fn dispatch(&mut self, event: &ScriptEvent) -> anyhow::Result<()> {
        log::debug!("replaying {:?}", event);
        match event {
            ScriptEvent::PointerDown { x, y, clicks } => {
                self.pointer = Point::new(*x, *y);
                self.tool.on_pointer_down(self.pointer, *clicks);
            }
            ScriptEvent::PointerDragged { dx, dy, shift } => {
                // drag deltas are in screen direction, y grows downwards
                self.pointer = Point::new(self.pointer.x + dx, self.pointer.y - dy);
                let modifiers = if *shift { Modifiers::SHIFT } else { Modifiers::empty() };
                self.tool.on_pointer_dragged(self.pointer, Vector::new(*dx, *dy), modifiers);
            }
            ScriptEvent::PointerUp => self.tool.on_pointer_up(self.pointer),
            ScriptEvent::Key { key, shift, alt } => {
                let mut modifiers = Modifiers::empty();
                modifiers.set(Modifiers::SHIFT, *shift);
                modifiers.set(Modifiers::ALTERNATE, *alt);
                self.tool.on_key_down(KeyEvent::new(key.to_key()?, modifiers));
            }
            ScriptEvent::Advance { ms } => self.tool.scene_mut().advance(Duration::from_millis(*ms)),
            ScriptEvent::Apply => self.tool.apply(),
            ScriptEvent::Undo => {
                self.document.lock().undo()?;
                self.forward_info_changes();
            }
            ScriptEvent::Redo => {
                self.document.lock().redo()?;
                self.forward_info_changes();
            }
        }
        Ok(())
    }

    fn forward_info_changes(&mut self) {
        let changed = self.document.lock().take_info_changed();
        if changed {
            self.tool.on_document_info_changed();
        }
    }
}
