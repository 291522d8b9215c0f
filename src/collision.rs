//! Collision detection for Game2
//!
//! Everything in the level is an axis-aligned box, so the whole collision
//! system is one overlap test plus a couple of helpers built on it.
//!
//! # Architecture
//!
//! - `Rect`: float rectangle shared by every entity
//! - `Collidable` trait: implemented by anything the player can touch
//! - `overlaps()`: half-open AABB intersection
//! - `first_collision()`: first-hit search used by hazards
use serde::{Deserialize, Serialize};

/// Position and size of a box in world coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Trait for entities that participate in collision detection.
///
/// Each entity reports the box it currently occupies. Coins report their
/// square bounding box rather than the circle that gets drawn.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Edges that only touch do not count, so a player standing exactly on
/// top of a platform is not overlapping it.
///
/// # Example
///
/// ```rust
/// use platformer::{overlaps, Rect};
///
/// let player = Rect::new(10.0, 10.0, 20.0, 30.0);
/// let coin = Rect::new(20.0, 20.0, 16.0, 16.0);
/// assert!(overlaps(&player, &coin));
/// ```
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x < b.x + b.w && a.x + a.w > b.x;
    let y_overlap = a.y < b.y + b.h && a.y + a.h > b.y;

    x_overlap && y_overlap
}

/// Returns the index of the first entity in `entities` overlapping `bounds`.
///
/// Sequence order matters: hazards only ever report one hit per tick.
pub fn first_collision<T: Collidable>(bounds: &Rect, entities: &[T]) -> Option<usize> {
    entities
        .iter()
        .position(|other| overlaps(bounds, &other.bounds()))
}
