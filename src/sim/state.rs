//! Game session state
//!
//! Everything the simulation mutates lives in `GameState`. Outputs for
//! audio and logging are queued as `GameEvent`s for the driver to drain.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Duck;
use super::stream::{CloudStream, PipeStream};
use crate::audio::SoundCue;
use crate::consts::*;

/// Current phase of the game
///
/// Allowed transitions: Start -> Playing, Playing -> End, End -> Start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first flap
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Crashed, waiting for restart
    End,
}

/// How a sound cue should be started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Start playing; a cue that is already playing carries on
    Play,
    /// Stop any playback and replay from the beginning
    Restart,
}

/// Fire-and-forget notifications produced during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound { cue: SoundCue, playback: Playback },
    ToggleMute,
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Session configuration fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed for pipe and cloud placement
    pub seed: u64,
    /// Pipe spawn density (pipes per screen width)
    pub pipe_density: u32,
    /// Simulated time per `advance()`
    pub dt: f32,
    /// Include collision boxes in render snapshots
    pub debug_colliders: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            pipe_density: DEFAULT_PIPE_DENSITY,
            dt: DEFAULT_DT,
            debug_colliders: false,
        }
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Pipes passed this run
    pub score: u32,
    /// Player duck
    pub duck: Duck,
    /// Pipes, oldest first
    pub pipes: PipeStream,
    /// Background clouds, oldest first
    pub clouds: CloudStream,
    /// Downward acceleration per unit of simulated time
    pub gravity: f32,
    /// Simulated time per frame
    pub(crate) dt: f32,
    /// Collision boxes are exposed to the renderer when set
    pub debug_colliders: bool,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
    seed: u64,
}

impl GameState {
    /// Create a new session with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(SessionConfig {
            seed,
            ..SessionConfig::default()
        })
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let mut state = Self {
            phase: GamePhase::Start,
            score: 0,
            duck: Duck::default(),
            pipes: PipeStream::new(config.pipe_density),
            clouds: CloudStream::new(),
            gravity: GRAVITY,
            dt: DEFAULT_DT,
            debug_colliders: config.debug_colliders,
            rng: Pcg32::seed_from_u64(config.seed),
            events: Vec::new(),
            seed: config.seed,
        };
        state.set_time_scale(config.dt);
        log::info!(
            "New session: seed {}, pipe density {}, dt {}",
            config.seed,
            state.pipes.density(),
            state.dt
        );

        // Greeting quack, played twice like every restart
        state.play_restart_cue();

        state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Simulated time per frame
    pub fn time_scale(&self) -> f32 {
        self.dt
    }

    /// Set simulated time per frame; negative or NaN values become zero
    pub fn set_time_scale(&mut self, dt: f32) {
        self.dt = if dt.is_nan() || dt < 0.0 {
            log::warn!("Invalid time scale {}, using 0", dt);
            0.0
        } else {
            dt
        };
    }

    /// Drain queued events in the order they were produced
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Put the run back to its starting position
    ///
    /// Duck back to the start height at rest, both streams empty, score zero.
    /// The phase is left to the caller.
    pub fn reset(&mut self) {
        self.duck.reset();
        self.pipes.clear();
        self.clouds.clear();
        self.score = 0;
        self.play_restart_cue();
    }

    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {:?} -> {:?} (score {})", from, to, self.score);
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    pub(crate) fn emit_sound(&mut self, cue: SoundCue, playback: Playback) {
        self.events.push(GameEvent::Sound { cue, playback });
    }

    fn play_restart_cue(&mut self) {
        // Two plays per restart; kept as the game has always sounded
        self.emit_sound(SoundCue::Restart, Playback::Play);
        self.emit_sound(SoundCue::Restart, Playback::Play);
    }
}
