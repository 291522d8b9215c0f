//! Platforms the player can stand on
//!
//! A platform is either fixed in place or patrols horizontally. Both kinds
//! go through the same collision code in `Player::update`, so the moving
//! variant only differs in having an `Oscillator` driving its x.

use crate::collision::{Collidable, Rect};
use crate::oscillator::Oscillator;

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformKind {
    Static,
    Moving(Oscillator),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    rect: Rect,
    kind: PlatformKind,
}

impl Platform {
    pub fn new_static(x: f32, y: f32, w: f32, h: f32) -> Self {
        Platform {
            rect: Rect::new(x, y, w, h),
            kind: PlatformKind::Static,
        }
    }

    /// Creates a platform that sweeps from `x` to `x + range` and back.
    pub fn new_moving(x: f32, y: f32, w: f32, h: f32, range: f32, speed: f32) -> Self {
        Platform {
            rect: Rect::new(x, y, w, h),
            kind: PlatformKind::Moving(Oscillator::new(x, range, speed)),
        }
    }

    pub fn kind(&self) -> &PlatformKind {
        &self.kind
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.kind, PlatformKind::Moving(_))
    }

    /// Advances a moving platform; static platforms ignore this.
    pub fn update(&mut self, dt: f32) {
        if let PlatformKind::Moving(osc) = &mut self.kind {
            osc.update(dt);
            self.rect.x = osc.x;
        }
    }
}

impl Collidable for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
