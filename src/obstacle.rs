//! Static hazards. Touching one sends the player back to the level start.

use crate::collision::{Collidable, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Obstacle {
            rect: Rect::new(x, y, w, h),
        }
    }
}

impl Collidable for Obstacle {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
