// Game module - the simulation state machine
//
// This module contains:
// - world.rs: the Game struct, per-frame update order and level transitions
// - types.rs: GameState, GameEvent, ResetCause and GameError

pub mod types;
pub mod world;

// Re-export types for convenience
pub use types::*;
pub use world::Game;
