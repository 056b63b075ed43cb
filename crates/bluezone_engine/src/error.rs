//! Unified error types for bluezone_engine

use std::path::PathBuf;
use thiserror::Error;

use crate::{ShapeId, ZoneFamily};

/// Main error type for bluezone_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    WriteFile { path: PathBuf, message: String },

    // === Serialization Errors ===
    #[error("Invalid font info: {0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Can't serialize font info: {0}")]
    Serialize(#[from] toml::ser::Error),

    // === Zone Errors ===
    #[error("{family} list has an odd number of values ({len})")]
    OddZoneValueCount { family: ZoneFamily, len: usize },

    #[error("{family} list holds {count} zones, at most {max} are allowed")]
    TooManyZones { family: ZoneFamily, count: usize, max: usize },

    // === Scene Errors ===
    #[error("Shape {0:?} does not exist in the scene")]
    UnknownShape(ShapeId),
}

pub type Result<T> = std::result::Result<T, EngineError>;
