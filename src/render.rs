//! Frame rendering for the SDL2 driver
//!
//! Reads game state and draws it with flat rectangles. Nothing here mutates
//! the simulation.
//!
//! # Draw order
//!
//! 1. Sky (vertical gradient in bands)
//! 2. Level: static platforms, moving platforms, obstacles, coins, enemies, goal
//! 3. Player
//! 4. Particles
//! 5. HUD, then the win overlay if the game is over

use crate::text::{draw_text, draw_text_centered};
use platformer::collision::{Collidable, Rect as WorldRect};
use platformer::game::{Game, Rgb};
use platformer::particles::{ParticleSystem, PARTICLE_SIZE};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const SKY_TOP: (u8, u8, u8) = (0x9f, 0xdf, 0xff);
const SKY_BOTTOM: (u8, u8, u8) = (0xcf, 0xee, 0xff);
const SKY_BANDS: u32 = 40;

const PLATFORM_COLOR: Color = Color::RGB(40, 120, 40);
const PLATFORM_HIGHLIGHT: Color = Color::RGBA(255, 255, 255, 20);
const MOVING_PLATFORM_COLOR: Color = Color::RGB(0x55, 0xaa, 0x99);
const OBSTACLE_COLOR: Color = Color::RGB(0xbb, 0x33, 0x33);
const ENEMY_COLOR: Color = Color::RGB(0x99, 0x00, 0x00);
const COIN_COLOR: Color = Color::RGB(0xff, 0xde, 0x5a);
const COIN_RIM_COLOR: Color = Color::RGB(0xd7, 0x9a, 0x00);
const GOAL_GLOW: Color = Color::RGBA(120, 255, 120, 60);
const GOAL_COLOR: Color = Color::RGB(0x22, 0xaa, 0x22);
const PLAYER_COLOR: Color = Color::RGB(0x03, 0x33, 0xcc);
const PLAYER_SHADOW: Color = Color::RGBA(0, 0, 0, 38);
const HUD_BOX: Color = Color::RGBA(255, 255, 255, 230);
const HUD_TEXT: Color = Color::RGB(0x08, 0x30, 0x4a);
const HINT_TEXT: Color = Color::RGBA(255, 255, 255, 242);
const WIN_SHADE: Color = Color::RGBA(0, 0, 0, 153);

fn to_sdl(rect: &WorldRect) -> Rect {
    Rect::new(
        rect.x.round() as i32,
        rect.y.round() as i32,
        rect.w.round().max(1.0) as u32,
        rect.h.round().max(1.0) as u32,
    )
}

fn to_color(rgb: Rgb, alpha: f32) -> Color {
    Color::RGBA(rgb.r, rgb.g, rgb.b, (alpha * 255.0) as u8)
}

/// Draws one complete frame. The caller presents the canvas.
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    game: &Game,
    particles: &ParticleSystem,
) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);

    let width = game.config().world_width as u32;
    let height = game.config().world_height as u32;

    draw_sky(canvas, width, height)?;
    draw_level(canvas, game)?;
    draw_player(canvas, game)?;
    draw_particles(canvas, particles)?;
    draw_hud(canvas, game, width, height)?;

    if game.is_won() {
        canvas.set_draw_color(WIN_SHADE);
        canvas.fill_rect(None)?;
        draw_text_centered(
            canvas,
            "You beat all levels!",
            width as i32 / 2,
            height as i32 / 2 - 14,
            Color::RGB(255, 255, 255),
            4,
        )?;
    }

    Ok(())
}

fn draw_sky(canvas: &mut Canvas<Window>, width: u32, height: u32) -> Result<(), String> {
    let band_height = height.div_ceil(SKY_BANDS).max(1);
    for band in 0..SKY_BANDS {
        let t = band as f32 / (SKY_BANDS - 1) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        canvas.set_draw_color(Color::RGB(
            lerp(SKY_TOP.0, SKY_BOTTOM.0),
            lerp(SKY_TOP.1, SKY_BOTTOM.1),
            lerp(SKY_TOP.2, SKY_BOTTOM.2),
        ));
        canvas.fill_rect(Rect::new(0, (band * band_height) as i32, width, band_height))?;
    }
    Ok(())
}

fn draw_level(canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
    let level = game.level();

    for platform in level.static_platforms() {
        let bounds = platform.bounds();
        canvas.set_draw_color(PLATFORM_COLOR);
        canvas.fill_rect(to_sdl(&bounds))?;
        canvas.set_draw_color(PLATFORM_HIGHLIGHT);
        canvas.fill_rect(to_sdl(&WorldRect::new(bounds.x, bounds.y, bounds.w.min(80.0), 2.0)))?;
    }

    canvas.set_draw_color(MOVING_PLATFORM_COLOR);
    for platform in level.moving_platforms() {
        canvas.fill_rect(to_sdl(&platform.bounds()))?;
    }

    canvas.set_draw_color(OBSTACLE_COLOR);
    for obstacle in level.obstacles() {
        canvas.fill_rect(to_sdl(&obstacle.bounds()))?;
    }

    for coin in level.coins().iter().filter(|c| !c.is_collected()) {
        let bounds = coin.bounds();
        canvas.set_draw_color(COIN_RIM_COLOR);
        canvas.fill_rect(to_sdl(&bounds))?;
        canvas.set_draw_color(COIN_COLOR);
        let inset = coin.r * 0.25;
        canvas.fill_rect(to_sdl(&WorldRect::new(
            bounds.x + inset,
            bounds.y + inset,
            bounds.w - inset * 2.0,
            bounds.h - inset * 2.0,
        )))?;
    }

    canvas.set_draw_color(ENEMY_COLOR);
    for enemy in level.enemies() {
        canvas.fill_rect(to_sdl(&enemy.bounds()))?;
    }

    let goal = level.goal();
    canvas.set_draw_color(GOAL_GLOW);
    canvas.fill_rect(to_sdl(&WorldRect::new(goal.x - 12.0, goal.y - 12.0, goal.w + 24.0, goal.h + 24.0)))?;
    canvas.set_draw_color(GOAL_COLOR);
    canvas.fill_rect(to_sdl(&goal))?;

    Ok(())
}

fn draw_player(canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
    let bounds = game.player().bounds();
    canvas.set_draw_color(PLAYER_SHADOW);
    canvas.fill_rect(to_sdl(&WorldRect::new(bounds.x + 4.0, bounds.bottom() - 2.0, bounds.w, 4.0)))?;
    canvas.set_draw_color(PLAYER_COLOR);
    canvas.fill_rect(to_sdl(&bounds))
}

fn draw_particles(canvas: &mut Canvas<Window>, particles: &ParticleSystem) -> Result<(), String> {
    for p in particles.particles() {
        canvas.set_draw_color(to_color(p.color, p.alpha()));
        canvas.fill_rect(to_sdl(&WorldRect::new(p.x, p.y, PARTICLE_SIZE, PARTICLE_SIZE)))?;
    }
    Ok(())
}

fn draw_hud(canvas: &mut Canvas<Window>, game: &Game, width: u32, height: u32) -> Result<(), String> {
    canvas.set_draw_color(HUD_BOX);
    canvas.fill_rect(Rect::new(8, 8, 140, 56))?;

    draw_text(canvas, &format!("Level: {}", game.level_index() + 1), 18, 18, HUD_TEXT, 2)?;
    draw_text(canvas, &format!("Score: {}", game.score()), 18, 40, HUD_TEXT, 2)?;

    draw_text_centered(
        canvas,
        "Arrows move - Space jumps - Double jump",
        width as i32 / 2,
        height as i32 - 20,
        HINT_TEXT,
        1,
    )
}
