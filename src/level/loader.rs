//! Reading level files
//!
//! A level file wraps the level list in an object:
//!
//! ```json
//! { "levels": [ { "platforms": [ { "x": 0, "y": 360, "w": 800, "h": 40 } ] } ] }
//! ```
//!
//! Validation happens here so the simulation never sees partial data.

use super::data::LevelData;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    pub levels: Vec<LevelData>,
}

/// Errors that can occur while loading levels
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid level data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Level file contains no levels")]
    NoLevels,
}

/// Parses a level document from a JSON string.
pub fn parse_levels(json: &str) -> Result<Vec<LevelData>, LevelError> {
    let file: LevelFile = serde_json::from_str(json)?;
    if file.levels.is_empty() {
        return Err(LevelError::NoLevels);
    }
    Ok(file.levels)
}

/// Loads and parses a level file from disk.
pub fn load_levels(path: impl AsRef<Path>) -> Result<Vec<LevelData>, LevelError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let levels = parse_levels(&json).inspect_err(|e| {
        log::warn!("Failed to load levels from {}: {}", path.display(), e);
    })?;
    log::info!("Loaded {} levels from {}", levels.len(), path.display());
    Ok(levels)
}
