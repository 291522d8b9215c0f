use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use std::time::{Duration, Instant};

mod render;
mod text;

use platformer::config::GameConfig;
use platformer::game::Game;
use platformer::input::{Action, InputSnapshot};
use platformer::level::load_levels;
use platformer::particles::ParticleSystem;

const DEFAULT_LEVELS_PATH: &str = "data/levels.json";
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Maps the keyboard onto logical actions for this frame
///
/// ArrowLeft/ArrowRight move, Space or ArrowUp jumps.
fn snapshot_keyboard(keyboard_state: &KeyboardState) -> InputSnapshot {
    let mut input = InputSnapshot::idle();
    input.set(Action::MoveLeft, keyboard_state.is_scancode_pressed(Scancode::Left));
    input.set(Action::MoveRight, keyboard_state.is_scancode_pressed(Scancode::Right));
    input.set(
        Action::Jump,
        keyboard_state.is_scancode_pressed(Scancode::Space)
            || keyboard_state.is_scancode_pressed(Scancode::Up),
    );
    input
}

/// Usage: `Game2 [levels.json] [config.json]`
fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let levels_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_LEVELS_PATH);
    let config = match args.get(2) {
        Some(path) => GameConfig::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path, e))?,
        None => GameConfig::default(),
    };

    let levels = load_levels(levels_path)
        .map_err(|e| format!("Failed loading {}: {}", levels_path, e))?;
    let mut game = Game::from_data(&levels, config.clone()).map_err(|e| e.to_string())?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window("Game 2 - Platformer", config.world_width as u32, config.world_height as u32)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let mut particles = ParticleSystem::new();
    let mut last_frame = Instant::now();

    // Game loop pattern: Input → Update → Render
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        // dt never exceeds config.max_dt
        let now = Instant::now();
        let dt = config.clamp_dt(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;

        let input = snapshot_keyboard(&event_pump.keyboard_state());
        let events = game.update(dt, &input);

        particles.handle_events(&events);
        particles.update(dt);

        render::draw_frame(&mut canvas, &game, &particles)?;
        canvas.present();

        std::thread::sleep(FRAME_TIME);
    }

    Ok(())
}
