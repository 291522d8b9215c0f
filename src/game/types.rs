// Shared enums and helper structs used by the game state machine

use thiserror::Error;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing { level_index: usize },
    /// All levels beaten; updates are ignored from here on
    Won,
}

/// Why the player was sent back to the level start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    Obstacle,
    Enemy,
    FellOffWorld,
}

/// Plain RGB color, independent of any rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Particle color for coin pickups (#ffd54d)
pub const COIN_PARTICLE_COLOR: Rgb = Rgb::new(0xff, 0xd5, 0x4d);

/// Things that happened during one `Game::update`, in the order they happened.
///
/// The renderer uses these for one-shot effects such as particle bursts.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A coin was picked up. `x`/`y` is the coin center.
    CoinCollected {
        index: usize,
        x: f32,
        y: f32,
        color: Rgb,
    },
    PlayerReset {
        cause: ResetCause,
    },
    LevelCompleted {
        index: usize,
    },
    Won,
}

/// Errors from constructing or driving a `Game`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("A game needs at least one level")]
    NoLevels,
    #[error("Level index {index} out of range ({count} levels)")]
    LevelOutOfRange { index: usize, count: usize },
}
