//! Level descriptors as they appear in `levels.json`
//!
//! Keys are camelCase to match the level files. Every array is optional and
//! every field with a documented default falls back to it when missing.

use crate::collectible::DEFAULT_COIN_RADIUS;
use crate::collision::Rect;
use crate::enemy::{DEFAULT_ENEMY_RANGE, DEFAULT_ENEMY_SIZE, DEFAULT_ENEMY_SPEED};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER_START: PointData = PointData { x: 20.0, y: 100.0 };
pub const DEFAULT_GOAL: Rect = Rect {
    x: 720.0,
    y: 300.0,
    w: 40.0,
    h: 40.0,
};
pub const DEFAULT_OBSTACLE_SIZE: f32 = 20.0;
pub const DEFAULT_MOVING_RANGE: f32 = 100.0;
pub const DEFAULT_MOVING_SPEED: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleData {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_obstacle_size")]
    pub w: f32,
    #[serde(default = "default_obstacle_size")]
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingPlatformData {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(default = "default_moving_range")]
    pub range: f32,
    #[serde(default = "default_moving_speed")]
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinData {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_coin_radius")]
    pub r: f32,
}

/// Enemy descriptor. Size, range and speed are optional; a missing value or
/// an explicit zero both mean "use the default".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyData {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl EnemyData {
    pub fn width(&self) -> f32 {
        nonzero_or(self.w, DEFAULT_ENEMY_SIZE)
    }

    pub fn height(&self) -> f32 {
        nonzero_or(self.h, DEFAULT_ENEMY_SIZE)
    }

    pub fn range(&self) -> f32 {
        nonzero_or(self.range, DEFAULT_ENEMY_RANGE)
    }

    pub fn speed(&self) -> f32 {
        nonzero_or(self.speed, DEFAULT_ENEMY_SPEED)
    }
}

/// One level as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelData {
    pub platforms: Vec<Rect>,
    pub obstacles: Vec<ObstacleData>,
    pub moving_platforms: Vec<MovingPlatformData>,
    pub coins: Vec<CoinData>,
    pub enemies: Vec<EnemyData>,
    pub player_start: PointData,
    pub goal: Rect,
}

impl Default for LevelData {
    fn default() -> Self {
        LevelData {
            platforms: Vec::new(),
            obstacles: Vec::new(),
            moving_platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            player_start: DEFAULT_PLAYER_START,
            goal: DEFAULT_GOAL,
        }
    }
}

fn nonzero_or(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

fn default_obstacle_size() -> f32 {
    DEFAULT_OBSTACLE_SIZE
}

fn default_moving_range() -> f32 {
    DEFAULT_MOVING_RANGE
}

fn default_moving_speed() -> f32 {
    DEFAULT_MOVING_SPEED
}

fn default_coin_radius() -> f32 {
    DEFAULT_COIN_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let data: LevelData = serde_json::from_str("{}").expect("empty level should parse");
        assert!(data.platforms.is_empty());
        assert!(data.moving_platforms.is_empty());
        assert!(data.enemies.is_empty());
        assert_eq!(data.player_start, DEFAULT_PLAYER_START);
        assert_eq!(data.goal, DEFAULT_GOAL);
    }

    #[test]
    fn test_entry_defaults() {
        let json = r#"{
            "obstacles": [{ "x": 10, "y": 20 }],
            "movingPlatforms": [{ "x": 0, "y": 200, "w": 80, "h": 12 }],
            "coins": [{ "x": 5, "y": 6 }],
            "enemies": [{ "x": 300, "y": 330, "speed": 0 }]
        }"#;
        let data: LevelData = serde_json::from_str(json).expect("level should parse");

        assert_eq!(data.obstacles[0].w, 20.0);
        assert_eq!(data.obstacles[0].h, 20.0);
        assert_eq!(data.moving_platforms[0].range, 100.0);
        assert_eq!(data.moving_platforms[0].speed, 60.0);
        assert_eq!(data.coins[0].r, 8.0);

        let enemy = &data.enemies[0];
        assert_eq!(enemy.width(), 20.0);
        assert_eq!(enemy.height(), 20.0);
        assert_eq!(enemy.range(), 80.0);
        assert_eq!(enemy.speed(), 50.0);
    }

    #[test]
    fn test_explicit_values_win() {
        let json = r#"{
            "playerStart": { "x": 40, "y": 60 },
            "goal": { "x": 1, "y": 2, "w": 3, "h": 4 },
            "enemies": [{ "x": 0, "y": 0, "w": 30, "h": 10, "range": 120, "speed": 75 }]
        }"#;
        let data: LevelData = serde_json::from_str(json).expect("level should parse");

        assert_eq!(data.player_start, PointData { x: 40.0, y: 60.0 });
        assert_eq!(data.goal, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(data.enemies[0].width(), 30.0);
        assert_eq!(data.enemies[0].range(), 120.0);
        assert_eq!(data.enemies[0].speed(), 75.0);
    }

    #[test]
    fn test_missing_required_geometry_fails() {
        let result: Result<LevelData, _> = serde_json::from_str(r#"{ "platforms": [{ "x": 1 }] }"#);
        assert!(result.is_err());
    }
}
