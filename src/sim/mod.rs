//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One frame per `advance()`, scaled by a caller-supplied dt
//! - Seeded RNG only
//! - FIFO order for pipes and clouds (oldest at the front)
//! - No rendering, audio or platform dependencies; side effects leave as events

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod motion;
pub mod pipe;
pub mod player;
pub mod state;
pub mod stream;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::Rect;
pub use input::{Action, action_for_key};
pub use motion::MovingEntity;
pub use pipe::Pipe;
pub use player::Duck;
pub use state::{GameEvent, GamePhase, GameState, Playback, SessionConfig};
pub use stream::{Cloud, CloudStream, PipeStream, SpriteId};
pub use tick::tick;
