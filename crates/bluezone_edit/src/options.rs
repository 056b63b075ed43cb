use std::{
    fs,
    path::{Path, PathBuf},
};

use bluezone_engine::{Color, EngineError, Result, ZoneFamily, MAX_ZONES_PER_FAMILY};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "bluezone_editor";

pub(crate) static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Tunables of the zone editor, persisted in `options.toml`.
///
/// Missing keys fall back to their defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueZoneOptions {
    /// Band fill of `postscriptBlueValues` zones
    pub primary_color: Color,
    /// Band fill of `postscriptOtherBlues` zones
    pub other_color: Color,

    /// Half the horizontal span of the band; bands run from `-view_width`
    /// over `4 * view_width` units.
    pub view_width: f64,

    /// Show the position labels on every zone, not only selected ones
    pub always_show_labels: bool,

    pub zone_limit: usize,

    /// A click selects an edge only when it lands closer than this
    pub edge_hit_distance: f64,

    /// Height of a zone created by double clicking empty space
    pub new_zone_height: i32,

    /// Zone heights snap to multiples of this while shift is held
    pub snap_step: i32,
}

impl Default for BlueZoneOptions {
    fn default() -> Self {
        Self {
            primary_color: Color::new(0.5, 0.7, 1.0, 0.3),
            other_color: Color::new(1.0, 0.6, 0.4, 0.3),
            view_width: 6000.0,
            always_show_labels: true,
            zone_limit: MAX_ZONES_PER_FAMILY,
            edge_hit_distance: 6.0,
            new_zone_height: 20,
            snap_step: 5,
        }
    }
}

impl BlueZoneOptions {
    pub const FILE_NAME: &'static str = "options.toml";

    pub fn family_color(&self, family: ZoneFamily) -> Color {
        match family {
            ZoneFamily::Primary => self.primary_color,
            ZoneFamily::Other => self.other_color,
        }
    }

    pub fn load() -> Self {
        let Some(options_file) = Self::config_file() else {
            return Self::default();
        };
        if !options_file.exists() {
            return Self::default();
        }
        match Self::load_from(&options_file) {
            Ok(options) => options,
            Err(err) => {
                log::error!("Error loading options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| EngineError::ReadFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn store_persistent(&self) {
        let Some(options_file) = Self::config_file() else {
            log::error!("Cannot determine config directory for saving options");
            return;
        };
        if let Err(err) = self.store_to(&options_file) {
            log::error!("Error storing options: {}", err);
        }
    }

    /// Write to a temporary file next to `path` first, then rename it over `path`.
    pub fn store_to(&self, path: &Path) -> Result<()> {
        let write_error = |err: std::io::Error| EngineError::WriteFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_error)?;
        }

        let text = toml::to_string_pretty(self)?;
        let temp_path = path.with_extension("toml.tmp");
        let result = fs::write(&temp_path, text).and_then(|()| fs::rename(&temp_path, path));
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result.map_err(write_error)
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(Self::FILE_NAME))
    }

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir()
    }
}
