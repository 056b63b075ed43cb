//! Font info record holding the PostScript hinting zones
//!
//! Blue zones are stored the way font sources store them: a flat list of
//! `2N` integers, read as `N` consecutive `(bottom, top)` pairs.
//! - `postscriptBlueValues` holds the baseline/x-height/cap-height zones
//!   (and the first zone is the baseline overshoot)
//! - `postscriptOtherBlues` holds descender zones

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// The Type 1 hinting format allows at most seven zones per list.
pub const MAX_ZONES_PER_FAMILY: usize = 7;

/// Which of the two value lists a zone lives in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneFamily {
    #[default]
    Primary,
    Other,
}

impl ZoneFamily {
    pub const ALL: [ZoneFamily; 2] = [ZoneFamily::Primary, ZoneFamily::Other];

    /// Name of the font info property backing this family
    pub fn key(&self) -> &'static str {
        match self {
            ZoneFamily::Primary => "postscriptBlueValues",
            ZoneFamily::Other => "postscriptOtherBlues",
        }
    }

    pub fn toggled(self) -> ZoneFamily {
        match self {
            ZoneFamily::Primary => ZoneFamily::Other,
            ZoneFamily::Other => ZoneFamily::Primary,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, ZoneFamily::Other)
    }
}

impl std::fmt::Display for ZoneFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    #[serde(default)]
    pub family_name: String,

    #[serde(default)]
    pub style_name: String,

    #[serde(default = "default_units_per_em")]
    pub units_per_em: u32,

    #[serde(default)]
    pub postscript_blue_values: Vec<i32>,

    #[serde(default)]
    pub postscript_other_blues: Vec<i32>,
}

fn default_units_per_em() -> u32 {
    1000
}

impl FontInfo {
    pub fn new(family_name: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            style_name: style_name.into(),
            units_per_em: default_units_per_em(),
            ..Default::default()
        }
    }

    pub fn zone_values(&self, family: ZoneFamily) -> &[i32] {
        match family {
            ZoneFamily::Primary => &self.postscript_blue_values,
            ZoneFamily::Other => &self.postscript_other_blues,
        }
    }

    pub fn set_zone_values(&mut self, family: ZoneFamily, values: Vec<i32>) {
        match family {
            ZoneFamily::Primary => self.postscript_blue_values = values,
            ZoneFamily::Other => self.postscript_other_blues = values,
        }
    }

    /// Number of complete `(start, end)` pairs stored for `family`
    pub fn zone_count(&self, family: ZoneFamily) -> usize {
        self.zone_values(family).len() / 2
    }

    /// Check both lists for an even value count and the per-family limit.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        for family in ZoneFamily::ALL {
            validate_zone_values(family, self.zone_values(family))?;
        }
        Ok(())
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let info: FontInfo = toml::from_str(text)?;
        Ok(info)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a font info record from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or doesn't parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| EngineError::ReadFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let info = Self::from_toml_str(&text)?;
        if let Err(err) = info.validate() {
            log::warn!("{}: {}", path.display(), err);
        }
        Ok(info)
    }

    /// # Errors
    ///
    /// Fails if the record can't be serialized or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|err| EngineError::WriteFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// # Errors
///
/// Fails on an odd value count or more than [`MAX_ZONES_PER_FAMILY`] pairs.
pub fn validate_zone_values(family: ZoneFamily, values: &[i32]) -> Result<()> {
    if values.len() % 2 != 0 {
        return Err(EngineError::OddZoneValueCount { family, len: values.len() });
    }
    let count = values.len() / 2;
    if count > MAX_ZONES_PER_FAMILY {
        return Err(EngineError::TooManyZones {
            family,
            count,
            max: MAX_ZONES_PER_FAMILY,
        });
    }
    Ok(())
}

/// Iterate a flat value list as `(start, end)` pairs; a trailing unpaired
/// value is skipped.
pub fn zone_pairs(values: &[i32]) -> impl Iterator<Item = (i32, i32)> + '_ {
    values.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}
