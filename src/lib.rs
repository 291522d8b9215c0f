//! Platformer simulation core for Game2
//!
//! This crate holds everything the game needs except the window: geometry,
//! entities, the player body, levels, configuration and the game state
//! machine. The SDL2 driver in `main.rs` (behind the `window` feature) only
//! reads from here and feeds input in.
//!
//! # Architecture
//!
//! - `collision`: `Rect`, AABB overlap and the `Collidable` trait
//! - `oscillator`: back-and-forth sweep shared by moving platforms and enemies
//! - `platform`, `obstacle`, `collectible`, `enemy`: level entities
//! - `input`: logical actions and the `InputSource` capability
//! - `player`: kinematic body and platform collision resolution
//! - `level`: level descriptors, defaults and the JSON loader
//! - `config`: world size and physics tuning
//! - `game`: per-frame orchestration, scoring and level transitions
//! - `particles`: coin-collection bursts for the renderer

pub mod collectible;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod game;
pub mod input;
pub mod level;
pub mod obstacle;
pub mod oscillator;
pub mod particles;
pub mod platform;
pub mod player;

pub use collision::{overlaps, Collidable, Rect};
pub use config::{ConfigError, GameConfig, JumpTrigger};
pub use game::{Game, GameError, GameEvent, GameState, ResetCause};
pub use input::{Action, InputSnapshot, InputSource};
pub use level::{Level, LevelData, LevelError};
pub use player::Player;
