//! Idle/demo mode: a simple pilot that plays the game
//!
//! Produces the same discrete actions a player would, so the session cannot
//! tell the difference.

use super::input::Action;
use super::state::{GamePhase, GameState};

/// Keeps the duck level with the next gap
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Restart automatically after a crash
    pub auto_restart: bool,
    /// Flap when the collider center is this far below the target
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            auto_restart: true,
            margin: 4.0,
        }
    }
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self {
            auto_restart,
            ..Self::default()
        }
    }

    /// Height the duck collider should be centered on
    ///
    /// The gap of the oldest pipe not yet passed, or mid-screen when there
    /// is none.
    pub fn target_height(state: &GameState) -> f32 {
        state
            .pipes
            .iter()
            .find(|p| !p.passed)
            .map(|p| p.gap_center())
            .unwrap_or(crate::consts::SCREEN_SIZE / 2.0)
    }

    /// Actions for this frame
    pub fn decide(&self, state: &GameState) -> Vec<Action> {
        match state.phase {
            GamePhase::Start => vec![Action::Confirm],
            GamePhase::End if self.auto_restart => vec![Action::Restart],
            GamePhase::End => Vec::new(),
            GamePhase::Playing => {
                let duck = &state.duck;
                if !duck.wings_up {
                    // Release so the next press can flap again
                    return vec![Action::EndFlap];
                }
                let below = duck.collider.center().y > Self::target_height(state) + self.margin;
                let rising = duck.vel().y < 0.0;
                if below && !rising {
                    vec![Action::BeginFlap]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
