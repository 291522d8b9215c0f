//! Levels
//!
//! - `data`: serde descriptors read from `levels.json`
//! - `loader`: reading and validating level files
//!
//! `Level` is the built, playable form. Its entity lists never change size
//! after construction; moving platforms, enemies and coins only mutate their
//! own state.

pub mod data;
pub mod loader;

pub use data::{CoinData, EnemyData, LevelData, MovingPlatformData, ObstacleData, PointData};
pub use loader::{load_levels, parse_levels, LevelError, LevelFile};

use crate::collectible::Collectible;
use crate::collision::{overlaps, Rect};
use crate::enemy::Enemy;
use crate::obstacle::Obstacle;
use crate::platform::Platform;
use crate::player::{PLAYER_HEIGHT, PLAYER_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Static platforms first, then moving ones, each in file order.
    platforms: Vec<Platform>,
    obstacles: Vec<Obstacle>,
    coins: Vec<Collectible>,
    enemies: Vec<Enemy>,
    player_start: PointData,
    goal: Rect,
}

impl Level {
    pub fn from_data(data: &LevelData) -> Self {
        let statics = data
            .platforms
            .iter()
            .map(|p| Platform::new_static(p.x, p.y, p.w, p.h));
        let movers = data
            .moving_platforms
            .iter()
            .map(|mp| Platform::new_moving(mp.x, mp.y, mp.w, mp.h, mp.range, mp.speed));

        Level {
            platforms: statics.chain(movers).collect(),
            obstacles: data
                .obstacles
                .iter()
                .map(|o| Obstacle::new(o.x, o.y, o.w, o.h))
                .collect(),
            coins: data
                .coins
                .iter()
                .map(|c| Collectible::new(c.x, c.y, c.r))
                .collect(),
            enemies: data
                .enemies
                .iter()
                .map(|e| Enemy::new(e.x, e.y, e.width(), e.height(), e.range(), e.speed()))
                .collect(),
            player_start: data.player_start,
            goal: data.goal,
        }
    }

    /// Every platform the player collides with, in resolution order.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn static_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| !p.is_moving())
    }

    pub fn moving_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.is_moving())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn coins(&self) -> &[Collectible] {
        &self.coins
    }

    pub(crate) fn coins_mut(&mut self) -> &mut [Collectible] {
        &mut self.coins
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn player_start(&self) -> PointData {
        self.player_start
    }

    pub fn goal(&self) -> Rect {
        self.goal
    }

    /// Advances moving platforms, then enemies.
    pub fn update_movers(&mut self, dt: f32) {
        for platform in self.platforms.iter_mut().filter(|p| p.is_moving()) {
            platform.update(dt);
        }
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
    }

    /// True when a freshly spawned player already stands in the goal, which
    /// would complete the level on the first tick.
    pub fn start_overlaps_goal(&self) -> bool {
        let spawn = Rect::new(self.player_start.x, self.player_start.y, PLAYER_WIDTH, PLAYER_HEIGHT);
        overlaps(&spawn, &self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Collidable;

    fn sample_data() -> LevelData {
        LevelData {
            platforms: vec![Rect::new(0.0, 360.0, 800.0, 40.0)],
            moving_platforms: vec![MovingPlatformData {
                x: 200.0,
                y: 280.0,
                w: 80.0,
                h: 12.0,
                range: 100.0,
                speed: 60.0,
            }],
            obstacles: vec![ObstacleData { x: 300.0, y: 340.0, w: 20.0, h: 20.0 }],
            coins: vec![CoinData { x: 100.0, y: 300.0, r: 8.0 }],
            enemies: vec![EnemyData { x: 500.0, y: 340.0, ..EnemyData::default() }],
            ..LevelData::default()
        }
    }

    #[test]
    fn test_build_from_data() {
        let level = Level::from_data(&sample_data());

        assert_eq!(level.platforms().len(), 2);
        assert!(!level.platforms()[0].is_moving());
        assert!(level.platforms()[1].is_moving());
        assert_eq!(level.static_platforms().count(), 1);
        assert_eq!(level.moving_platforms().count(), 1);
        assert_eq!(level.obstacles().len(), 1);
        assert_eq!(level.coins().len(), 1);
        assert!(!level.coins()[0].is_collected());
        assert_eq!(level.enemies()[0].bounds(), Rect::new(500.0, 340.0, 20.0, 20.0));
        assert_eq!(level.player_start(), data::DEFAULT_PLAYER_START);
        assert_eq!(level.goal(), data::DEFAULT_GOAL);
    }

    #[test]
    fn test_update_movers_leaves_statics() {
        let mut level = Level::from_data(&sample_data());
        level.update_movers(0.5);

        assert_eq!(level.platforms()[0].bounds().x, 0.0);
        assert!((level.platforms()[1].bounds().x - 230.0).abs() < 1e-4);
        assert!((level.enemies()[0].x() - 525.0).abs() < 1e-4);
        assert_eq!(level.obstacles()[0].bounds().x, 300.0);
    }

    #[test]
    fn test_start_overlaps_goal() {
        let level = Level::from_data(&LevelData::default());
        assert!(!level.start_overlaps_goal());

        let level = Level::from_data(&LevelData {
            goal: Rect::new(10.0, 90.0, 40.0, 40.0),
            ..LevelData::default()
        });
        assert!(level.start_overlaps_goal());
    }
}
