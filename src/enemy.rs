//! Patrolling enemies. Contact sends the player back to the level start.

use crate::collision::{Collidable, Rect};
use crate::oscillator::{Direction, Oscillator};

pub const DEFAULT_ENEMY_SIZE: f32 = 20.0;
pub const DEFAULT_ENEMY_RANGE: f32 = 80.0;
pub const DEFAULT_ENEMY_SPEED: f32 = 50.0;

/// A patrolling enemy. It walks between its spawn x and `x + range` and
/// resets the player on contact, the same way an obstacle does.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub y: f32,
    pub width: f32,
    pub height: f32,
    patrol: Oscillator,
}

impl Enemy {
    pub fn new(x: f32, y: f32, width: f32, height: f32, range: f32, speed: f32) -> Self {
        Enemy {
            y,
            width,
            height,
            patrol: Oscillator::new(x, range, speed),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.patrol.update(dt);
    }

    pub fn x(&self) -> f32 {
        self.patrol.x
    }

    pub fn base_x(&self) -> f32 {
        self.patrol.base_x
    }

    pub fn range(&self) -> f32 {
        self.patrol.range
    }

    pub fn direction(&self) -> Direction {
        self.patrol.dir
    }
}

impl Collidable for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.patrol.x, self.y, self.width, self.height)
    }
}
