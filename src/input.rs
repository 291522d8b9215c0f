//! Logical input for the simulation
//!
//! The core never talks to a keyboard. It asks an `InputSource` whether a
//! logical action is held this frame. The SDL2 driver builds an
//! `InputSnapshot` from the keyboard state once per frame and passes it in;
//! tests build snapshots directly.
//!
//! # Architecture
//!
//! Input processing happens in phases:
//! 1. Driver reads raw key state (arrow keys, space)
//! 2. Raw keys are mapped to `Action`s into an `InputSnapshot`
//! 3. The snapshot is handed to `Game::update`, which passes it to the player

/// Actions the player can perform in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Capability to answer "is this action currently held".
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
}

/// Held state of every action for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    /// Nothing held.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
            Action::Jump => self.jump = held,
        }
    }
}

impl InputSource for InputSnapshot {
    fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Jump => self.jump,
        }
    }
}
