// Game struct and per-frame orchestration
//
// This module contains the Game struct which owns the levels, the player and
// the score. It runs one simulation step per frame and moves between levels.

use crate::collision::{first_collision, overlaps, Collidable};
use crate::config::GameConfig;
use crate::input::InputSource;
use crate::level::{Level, LevelData};
use crate::player::Player;

use super::{GameError, GameEvent, GameState, ResetCause, COIN_PARTICLE_COLOR};

const COIN_POINTS: i32 = 10;
const LEVEL_POINTS: i32 = 5;
const RESET_PENALTY: i32 = 1;

/// Game owns the whole play session
///
/// Levels are built once and kept for the session, the player is rebuilt
/// on every level load, and the score carries across levels.
pub struct Game {
    levels: Vec<Level>,
    level_index: usize,
    player: Player,
    score: i32,
    win: bool,
    config: GameConfig,
}

impl Game {
    /// Starts a session on the first level
    pub fn new(levels: Vec<Level>, config: GameConfig) -> Result<Self, GameError> {
        let first = levels.first().ok_or(GameError::NoLevels)?;
        let start = first.player_start();

        for (index, level) in levels.iter().enumerate() {
            if level.start_overlaps_goal() {
                log::warn!("Level {} spawns the player inside its goal", index + 1);
            }
        }

        let mut game = Game {
            player: Player::new(start.x, start.y),
            levels,
            level_index: 0,
            score: 0,
            win: false,
            config,
        };
        game.enter_level(0);
        Ok(game)
    }

    /// Builds every level from its descriptor and starts a session
    pub fn from_data(data: &[LevelData], config: GameConfig) -> Result<Self, GameError> {
        Self::new(data.iter().map(Level::from_data).collect(), config)
    }

    /// Switches to level `index` with a fresh player at its start
    pub fn load_level(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.levels.len() {
            return Err(GameError::LevelOutOfRange {
                index,
                count: self.levels.len(),
            });
        }
        self.enter_level(index);
        Ok(())
    }

    fn enter_level(&mut self, index: usize) {
        self.level_index = index;
        let start = self.levels[index].player_start();
        self.player = Player::new(start.x, start.y);
        self.win = false;
        log::info!("Entering level {}/{}", index + 1, self.levels.len());
    }

    /// Awards the completion bonus and moves on, or wins after the last level
    pub fn next_level(&mut self) -> Vec<GameEvent> {
        let completed = self.level_index;
        let mut events = vec![GameEvent::LevelCompleted { index: completed }];
        self.score += LEVEL_POINTS;
        log::info!("Level {} complete, score {}", completed + 1, self.score);

        if completed + 1 < self.levels.len() {
            self.enter_level(completed + 1);
        } else {
            self.win = true;
            events.push(GameEvent::Won);
            log::info!("All {} levels beaten, final score {}", self.levels.len(), self.score);
        }
        events
    }

    /// Runs one simulation step
    ///
    /// Order matters and every stage runs each tick:
    /// 1. Player, then moving platforms, then enemies
    /// 2. Obstacles (first hit only)
    /// 3. Enemies (first hit only, can stack with an obstacle hit)
    /// 4. Falling off the bottom of the world
    /// 5. Coins
    /// 6. Goal
    ///
    /// Does nothing once the game is won.
    pub fn update(&mut self, dt: f32, input: &impl InputSource) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.win {
            return events;
        }
        let dt = self.config.clamp_dt(dt);

        let level = &mut self.levels[self.level_index];
        self.player.update(dt, input, level.platforms(), &self.config);
        level.update_movers(dt);

        if first_collision(&self.player.bounds(), self.level().obstacles()).is_some() {
            self.reset_player(ResetCause::Obstacle, &mut events);
        }

        if first_collision(&self.player.bounds(), self.level().enemies()).is_some() {
            self.reset_player(ResetCause::Enemy, &mut events);
        }

        if self.player.y > self.config.world_height {
            self.reset_player(ResetCause::FellOffWorld, &mut events);
        }

        let player_bounds = self.player.bounds();
        let level = &mut self.levels[self.level_index];
        for (index, coin) in level.coins_mut().iter_mut().enumerate() {
            if overlaps(&player_bounds, &coin.bounds()) && coin.collect() {
                self.score += COIN_POINTS;
                let (x, y) = coin.center();
                events.push(GameEvent::CoinCollected {
                    index,
                    x,
                    y,
                    color: COIN_PARTICLE_COLOR,
                });
            }
        }

        if overlaps(&self.player.bounds(), &self.level().goal()) {
            events.extend(self.next_level());
        }

        events
    }

    fn reset_player(&mut self, cause: ResetCause, events: &mut Vec<GameEvent>) {
        let start = self.level().player_start();
        self.player.reset(start.x, start.y);
        self.score -= RESET_PENALTY;
        log::debug!("Player reset ({:?}), score {}", cause, self.score);
        events.push(GameEvent::PlayerReset { cause });
    }

    pub fn state(&self) -> GameState {
        if self.win {
            GameState::Won
        } else {
            GameState::Playing {
                level_index: self.level_index,
            }
        }
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_won(&self) -> bool {
        self.win
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
