//! Flappy Duck entry point
//!
//! Headless driver: runs the simulation at a fixed rate with the autopilot
//! at the controls, sends sound cues to the log, and prints the final frame.
//!
//! Usage: `flappy-duck [settings.json]`

use std::time::{Duration, Instant};

use flappy_duck::audio::{AudioManager, LogSink};
use flappy_duck::renderer::build_draw_list;
use flappy_duck::settings::Settings;
use flappy_duck::sim::{Autopilot, GamePhase, GameState, tick};

fn main() {
    env_logger::init();
    log::info!("Flappy Duck (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::error!("{}; using default settings", e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let mut state = GameState::with_config(settings.session_config());
    let mut audio = AudioManager::new(LogSink);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let pilot = Autopilot::new(settings.auto_restart);
    let period = Duration::from_secs_f64(settings.frame_period_ms() / 1000.0);
    let mut best_score = 0;
    let mut runs = 0;
    let mut next_frame = Instant::now();

    for _ in 0..settings.frames {
        let actions = pilot.decide(&state);
        let before = state.phase;
        tick(&mut state, &actions);

        if before == GamePhase::Playing && state.phase == GamePhase::End {
            runs += 1;
            best_score = best_score.max(state.score);
        }
        audio.handle_events(&state.take_events());

        if settings.realtime {
            next_frame += period;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else {
                // Fell behind; don't try to catch up
                next_frame = now;
            }
        }
    }
    best_score = best_score.max(state.score);

    let snapshot = state.render_state();
    let draw_list = build_draw_list(&snapshot);
    log::info!(
        "Finished {} frames: {} crashes, best score {}, last frame has {} sprites",
        settings.frames,
        runs,
        best_score,
        draw_list.sprites.len()
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}
