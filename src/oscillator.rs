//! Horizontal back-and-forth sweep
//!
//! Moving platforms and enemies both patrol between `base_x` and
//! `base_x + range`. The position is integrated with dt and clamped at the
//! ends, where the direction flips.

/// Travel direction along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Patrol state. `x` always stays within `[base_x, base_x + range]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    pub x: f32,
    pub base_x: f32,
    pub range: f32,
    pub speed: f32,
    pub dir: Direction,
}

impl Oscillator {
    /// Starts at `base_x` heading right.
    pub fn new(base_x: f32, range: f32, speed: f32) -> Self {
        Oscillator {
            x: base_x,
            base_x,
            range: range.max(0.0),
            speed,
            dir: Direction::Right,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.x += self.dir.sign() * self.speed * dt;

        let max_x = self.base_x + self.range;
        if self.x > max_x {
            self.x = max_x;
            self.dir = Direction::Left;
        } else if self.x < self.base_x {
            self.x = self.base_x;
            self.dir = Direction::Right;
        }
    }
}
