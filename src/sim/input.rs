//! Discrete input actions
//!
//! Raw devices are mapped to these by the driver; the simulation never sees
//! keys or timers.

use serde::{Deserialize, Serialize};

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Flap key pressed: starts the game from the title screen, flaps while playing
    BeginFlap,
    /// Flap key released: wings back up
    EndFlap,
    /// Leave the title screen
    Confirm,
    /// Back to the title screen after a crash
    Restart,
    /// Mute or unmute every sound cue
    ToggleMute,
}

pub const KEY_SPACE: u32 = 32;
pub const KEY_M: u32 = 77;
pub const KEY_R: u32 = 82;

/// Map a keyboard key code to an action
///
/// Space drives the wings on press and release; `m` and `r` only act on press.
pub fn action_for_key(key_code: u32, pressed: bool) -> Option<Action> {
    match (key_code, pressed) {
        (KEY_SPACE, true) => Some(Action::BeginFlap),
        (KEY_SPACE, false) => Some(Action::EndFlap),
        (KEY_M, true) => Some(Action::ToggleMute),
        (KEY_R, true) => Some(Action::Restart),
        _ => None,
    }
}
