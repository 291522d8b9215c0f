//! Game configuration
//!
//! World size and physics tuning live here instead of as scattered
//! constants. `GameConfig::default()` reproduces the stock game; a JSON file
//! can override any subset of fields:
//!
//! ```json
//! { "world_width": 960.0, "jump_trigger": "Pressed" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// When a held jump key consumes a jump charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpTrigger {
    /// Every tick the key is down (stock behavior: holding jump spends both
    /// charges on consecutive ticks).
    #[default]
    Held,
    /// Only on the tick the key goes down.
    Pressed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_velocity: f32,
    /// Upper bound on a single simulation step, in seconds.
    pub max_dt: f32,
    pub jump_trigger: JumpTrigger,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            world_width: 800.0,
            world_height: 400.0,
            gravity: 900.0,
            move_speed: 160.0,
            jump_velocity: -420.0,
            max_dt: 0.05,
            jump_trigger: JumpTrigger::Held,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if !(self.max_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_dt must be positive, got {}",
                self.max_dt
            )));
        }
        Ok(())
    }

    /// Clamps a raw frame time into `[0, max_dt]`. NaN becomes 0.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_dt)
    }
}
