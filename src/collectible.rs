//! Coins
//!
//! A coin is drawn as a circle of radius `r` whose top-left corner sits at
//! `(x, y)`, and collides as the `2r` square around it. Collection is one-way.

use crate::collision::{Collidable, Rect};

/// Default coin radius when the level data leaves it out.
pub const DEFAULT_COIN_RADIUS: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    collected: bool,
}

impl Collectible {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Collectible {
            x,
            y,
            r,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the coin as taken. Returns `true` only the first time.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.r, self.y + self.r)
    }
}

impl Collidable for Collectible {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.r * 2.0, self.r * 2.0)
    }
}
