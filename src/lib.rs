//! Flappy Duck - a single-screen side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, pipes, collisions, game state)
//! - `renderer`: Render snapshot to draw list (what to draw and where)
//! - `audio`: Sound cues and the audio backend seam
//! - `settings`: Configuration loaded from JSON

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundCue};
pub use settings::Settings;
pub use sim::{Action, GameEvent, GamePhase, GameState};

/// Game configuration constants
///
/// All positions live in a fixed 512x512 logical space, origin top-left,
/// y increasing downward.
pub mod consts {
    /// Logical screen width and height
    pub const SCREEN_SIZE: f32 = 512.0;

    /// Nominal frame rate the time scale is calibrated against
    pub const BASE_FPS: f32 = 30.0;
    /// Simulated time per frame at the base frame rate
    pub const DEFAULT_DT: f32 = 1.0;

    /// Downward acceleration applied to the duck each frame (scaled by dt)
    pub const GRAVITY: f32 = 0.5;

    /// Duck sprite is 64x64
    pub const DUCK_SIZE: f32 = 64.0;
    pub const DUCK_START_X: f32 = 64.0;
    pub const DUCK_START_Y: f32 = 256.0;
    /// Lowest y the duck may reach (sprite bottom on the screen edge)
    pub const DUCK_MAX_Y: f32 = SCREEN_SIZE - DUCK_SIZE;
    /// Upward velocity impulse of one flap
    pub const FLAP_STRENGTH: f32 = 5.0;
    /// Collision box is inset from the sprite
    pub const DUCK_COLLIDER_OFFSET_X: f32 = 8.0;
    pub const DUCK_COLLIDER_OFFSET_Y: f32 = 16.0;
    pub const DUCK_COLLIDER_SIZE: f32 = 32.0;

    /// Pipes enter at the right edge
    pub const PIPE_SPAWN_X: f32 = SCREEN_SIZE;
    /// Horizontal pipe velocity (leftward)
    pub const PIPE_SPEED: f32 = -2.0;
    /// Vertical opening between the top and bottom pipe
    pub const PIPE_GAP: f32 = 64.0;
    /// Height of the top cap segment, subtracted from the top collider
    pub const PIPE_SEGMENT: f32 = 64.0;
    /// Pipe sprite width
    pub const PIPE_SPRITE_WIDTH: f32 = 128.0;
    pub const PIPE_COLLIDER_INSET: f32 = 24.0;
    pub const PIPE_COLLIDER_WIDTH: f32 = 80.0;
    /// Clear positions are drawn from [0, PIPE_CLEAR_RANGE)
    pub const PIPE_CLEAR_RANGE: f32 = SCREEN_SIZE - 128.0;
    /// A pipe scores once its x drops below this
    pub const PIPE_PASS_X: f32 = 10.0;
    /// Pipes are retired once fully off the left edge
    pub const PIPE_RETIRE_X: f32 = -128.0;
    /// Never more than this many pipes alive
    pub const MAX_PIPES: usize = 3;
    /// Default spawn density (screen width / pipe spacing)
    pub const DEFAULT_PIPE_DENSITY: u32 = 2;

    /// Clouds enter just past the right edge
    pub const CLOUD_SPAWN_X: f32 = SCREEN_SIZE + 64.0;
    pub const CLOUD_SPEED: f32 = -1.5;
    pub const CLOUD_RETIRE_X: f32 = -64.0;
    /// Spawn chance per frame is (dt / CLOUD_SPAWN_DIVISOR) / 2
    pub const CLOUD_SPAWN_DIVISOR: f32 = 30.0;
}
