use crate::collision::{overlaps, Collidable, Rect};
use crate::config::{GameConfig, JumpTrigger};
use crate::input::{Action, InputSource};
use crate::platform::Platform;

pub const PLAYER_WIDTH: f32 = 20.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
/// Jump charges restored on landing (double jump).
pub const MAX_JUMPS: u8 = 2;

/// The player's kinematic body.
///
/// Horizontal velocity comes straight from input every tick, vertical
/// velocity is integrated under gravity, and platforms are resolved one at
/// a time in level order after the move.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub jumps_left: u8,
    jump_was_held: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            velocity_x: 0.0,
            velocity_y: 0.0,
            on_ground: false,
            jumps_left: MAX_JUMPS,
            jump_was_held: false,
        }
    }

    /// Puts the player back at `(x, y)` at rest with full jump charges.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.on_ground = false;
        self.jumps_left = MAX_JUMPS;
        self.jump_was_held = false;
    }

    pub fn update(
        &mut self,
        dt: f32,
        input: &impl InputSource,
        platforms: &[Platform],
        config: &GameConfig,
    ) {
        // Left wins when both directions are held
        self.velocity_x = if input.is_held(Action::MoveLeft) {
            -config.move_speed
        } else if input.is_held(Action::MoveRight) {
            config.move_speed
        } else {
            0.0
        };

        let jump_held = input.is_held(Action::Jump);
        let jump_fired = match config.jump_trigger {
            JumpTrigger::Held => jump_held,
            JumpTrigger::Pressed => jump_held && !self.jump_was_held,
        };
        self.jump_was_held = jump_held;

        if jump_fired && self.jumps_left > 0 {
            self.velocity_y = config.jump_velocity;
            self.on_ground = false;
            self.jumps_left -= 1;
        }

        self.velocity_y += config.gravity * dt;

        self.x += self.velocity_x * dt;
        self.x = self.x.min(config.world_width - self.width).max(0.0);

        let previous_bottom = self.y + self.height;
        self.y += self.velocity_y * dt;
        self.on_ground = false;

        for platform in platforms {
            self.resolve_platform(&platform.bounds(), previous_bottom);
        }
    }

    /// Pushes the player out of one platform.
    ///
    /// Each platform sees the position left by the previous one and nothing
    /// is re-tested, so stacks of three or more overlapping platforms can
    /// resolve differently depending on their order.
    fn resolve_platform(&mut self, platform: &Rect, previous_bottom: f32) {
        if !overlaps(&self.bounds(), platform) {
            return;
        }

        if self.velocity_y > 0.0 && previous_bottom <= platform.y {
            // Landing on top
            self.y = platform.y - self.height;
            self.velocity_y = 0.0;
            self.on_ground = true;
            self.jumps_left = MAX_JUMPS;
        } else if self.velocity_y < 0.0 && self.y >= platform.bottom() {
            // Head bump
            self.y = platform.bottom();
            self.velocity_y = 0.0;
        } else if self.velocity_x > 0.0 {
            self.x = platform.x - self.width;
        } else if self.velocity_x < 0.0 {
            self.x = platform.right();
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.velocity_x, self.velocity_y)
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSnapshot;

    const DT: f32 = 0.05;

    fn ground() -> Vec<Platform> {
        vec![Platform::new_static(0.0, 300.0, 800.0, 20.0)]
    }

    fn landed_player(config: &GameConfig) -> Player {
        let mut player = Player::new(50.0, 250.0);
        let platforms = ground();
        for _ in 0..100 {
            player.update(DT, &InputSnapshot::idle(), &platforms, config);
            if player.on_ground {
                break;
            }
        }
        assert!(player.on_ground, "player never landed");
        player
    }

    #[test]
    fn test_horizontal_velocity_from_input() {
        let config = GameConfig::default();
        let mut player = Player::new(100.0, 100.0);

        player.update(DT, &InputSnapshot::idle().with(Action::MoveRight), &[], &config);
        assert_eq!(player.velocity_x, 160.0);
        assert!((player.x - 108.0).abs() < 1e-4);

        player.update(DT, &InputSnapshot::idle().with(Action::MoveLeft), &[], &config);
        assert_eq!(player.velocity_x, -160.0);

        player.update(DT, &InputSnapshot::idle(), &[], &config);
        assert_eq!(player.velocity_x, 0.0);
    }

    #[test]
    fn test_both_directions_held_moves_left() {
        let config = GameConfig::default();
        let mut player = Player::new(100.0, 100.0);
        let input = InputSnapshot::idle()
            .with(Action::MoveLeft)
            .with(Action::MoveRight);

        player.update(DT, &input, &[], &config);
        assert_eq!(player.velocity_x, -160.0);
    }

    #[test]
    fn test_gravity_accumulates() {
        let config = GameConfig::default();
        let mut player = Player::new(100.0, 100.0);

        player.update(DT, &InputSnapshot::idle(), &[], &config);
        assert!((player.velocity_y - 45.0).abs() < 1e-4);
        assert!((player.y - 102.25).abs() < 1e-4);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_clamped_to_world_width() {
        let config = GameConfig::default();
        let mut player = Player::new(2.0, 100.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveLeft), &[], &config);
        assert_eq!(player.x, 0.0);

        let mut player = Player::new(778.0, 100.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveRight), &[], &config);
        assert_eq!(player.x, 780.0);
    }

    #[test]
    fn test_landing_snaps_and_restores_jumps() {
        let config = GameConfig::default();
        let player = landed_player(&config);

        assert_eq!(player.y, 270.0);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.jumps_left, MAX_JUMPS);
    }

    #[test]
    fn test_resting_player_stays_on_platform() {
        let config = GameConfig::default();
        let mut player = landed_player(&config);
        let platforms = ground();

        for _ in 0..60 {
            player.update(1.0 / 60.0, &InputSnapshot::idle(), &platforms, &config);
            assert!(player.on_ground);
            assert_eq!(player.y, 270.0);
        }
    }

    #[test]
    fn test_held_jump_drains_both_charges() {
        let config = GameConfig::default();
        let mut player = landed_player(&config);
        let platforms = ground();
        let jump = InputSnapshot::idle().with(Action::Jump);

        player.update(DT, &jump, &platforms, &config);
        assert_eq!(player.jumps_left, 1);
        assert!(player.velocity_y < 0.0);
        assert!(!player.on_ground);

        player.update(DT, &jump, &platforms, &config);
        assert_eq!(player.jumps_left, 0);
        assert!((player.velocity_y - (-420.0 + 45.0)).abs() < 1e-4);

        // No charges left; the held key no longer resets vy
        player.update(DT, &jump, &platforms, &config);
        assert_eq!(player.jumps_left, 0);
        assert!((player.velocity_y - (-375.0 + 45.0)).abs() < 1e-4);
    }

    #[test]
    fn test_pressed_trigger_needs_release_between_jumps() {
        let config = GameConfig {
            jump_trigger: JumpTrigger::Pressed,
            ..GameConfig::default()
        };
        let mut player = landed_player(&config);
        let platforms = ground();
        let jump = InputSnapshot::idle().with(Action::Jump);

        player.update(DT, &jump, &platforms, &config);
        player.update(DT, &jump, &platforms, &config);
        assert_eq!(player.jumps_left, 1);

        player.update(DT, &InputSnapshot::idle(), &platforms, &config);
        player.update(DT, &jump, &platforms, &config);
        assert_eq!(player.jumps_left, 0);
    }

    #[test]
    fn test_charges_only_come_back_on_landing() {
        let config = GameConfig::default();
        let mut player = landed_player(&config);
        let platforms = ground();
        let jump = InputSnapshot::idle().with(Action::Jump);

        player.update(DT, &jump, &platforms, &config);
        player.update(DT, &jump, &platforms, &config);
        assert_eq!(player.jumps_left, 0);

        let mut landed = false;
        for _ in 0..200 {
            player.update(DT, &InputSnapshot::idle(), &platforms, &config);
            assert!(player.jumps_left <= MAX_JUMPS);
            if player.on_ground {
                landed = true;
                break;
            }
            assert_eq!(player.jumps_left, 0);
        }
        assert!(landed);
        assert_eq!(player.jumps_left, MAX_JUMPS);
    }

    #[test]
    fn test_walking_into_wall_pushes_out() {
        let config = GameConfig::default();
        let wall = vec![Platform::new_static(100.0, 200.0, 20.0, 200.0)];

        let mut player = Player::new(79.0, 300.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveRight), &wall, &config);
        assert_eq!(player.x, 80.0);

        let mut player = Player::new(121.0, 300.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveLeft), &wall, &config);
        assert_eq!(player.x, 120.0);
    }

    #[test]
    fn test_moving_platform_pushes_out_sideways() {
        let config = GameConfig::default();
        let mut wall = vec![Platform::new_moving(100.0, 200.0, 20.0, 200.0, 40.0, 30.0)];
        wall[0].update(1.0);
        assert_eq!(wall[0].bounds().x, 130.0);

        let mut player = Player::new(109.0, 300.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveRight), &wall, &config);
        assert_eq!(player.x, 110.0);

        let mut player = Player::new(151.0, 300.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveLeft), &wall, &config);
        assert_eq!(player.x, 150.0);
    }

    #[test]
    fn test_rising_player_passes_up_through_platform() {
        // The head-bump test uses the post-move top, which can never be below
        // the bottom of a platform it overlaps, so platforms are one-way from below.
        let config = GameConfig::default();
        let ceiling = vec![Platform::new_static(0.0, 200.0, 800.0, 10.0)];
        let mut player = Player::new(50.0, 215.0);
        player.velocity_y = -300.0;

        player.update(DT, &InputSnapshot::idle(), &ceiling, &config);
        assert!((player.y - 202.25).abs() < 1e-4);
        assert!((player.velocity_y - (-255.0)).abs() < 1e-4);
    }

    #[test]
    fn test_platforms_resolved_in_order() {
        let config = GameConfig::default();
        // Two platforms at different heights under the player; the first one
        // in sequence wins the landing and the second no longer overlaps.
        let platforms = vec![
            Platform::new_static(0.0, 300.0, 200.0, 20.0),
            Platform::new_static(0.0, 305.0, 200.0, 20.0),
        ];
        let mut player = Player::new(50.0, 269.0);
        player.velocity_y = 200.0;

        player.update(DT, &InputSnapshot::idle(), &platforms, &config);
        assert!(player.on_ground);
        assert_eq!(player.y, 270.0);
    }

    #[test]
    fn test_reset_restores_start_state() {
        let config = GameConfig::default();
        let mut player = Player::new(20.0, 100.0);
        player.update(DT, &InputSnapshot::idle().with(Action::MoveRight).with(Action::Jump), &[], &config);
        player.on_ground = true;

        player.reset(20.0, 100.0);
        assert_eq!(player, Player::new(20.0, 100.0));
    }
}
