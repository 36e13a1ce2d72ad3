//! Per-frame simulation step and input handling
//!
//! The driver calls `handle_action` for each input event and `advance` once
//! per frame; neither knows about timers or devices.

use rand::Rng;

use super::input::Action;
use super::state::{GameEvent, GamePhase, GameState, Playback};
use super::stream::Cloud;
use crate::audio::SoundCue;
use crate::consts::*;

/// Apply this frame's actions, then advance one frame
pub fn tick(state: &mut GameState, actions: &[Action]) {
    for &action in actions {
        state.handle_action(action);
    }
    state.advance();
}

impl GameState {
    /// Run one frame: motion while playing, then the loss check
    pub fn advance(&mut self) {
        if self.phase == GamePhase::Playing {
            self.step_playing();
        }
        self.check_loss();
    }

    fn step_playing(&mut self) {
        let dt = self.dt;

        self.duck.accelerate(0.0, self.gravity * dt);
        self.duck.step(dt);

        let passed = self.pipes.step(dt, &mut self.rng);
        for _ in 0..passed {
            self.score += 1;
            self.emit_sound(SoundCue::Score, Playback::Play);
        }

        self.clouds.step(dt);

        // About one cloud per second at the base frame rate
        let spawn_chance = (dt / CLOUD_SPAWN_DIVISOR) / 2.0;
        if self.rng.random::<f32>() < spawn_chance {
            let y = self.rng.random::<f32>() * SCREEN_SIZE;
            self.clouds.push(Cloud::spawn(y));
        }
        if self
            .clouds
            .first()
            .is_some_and(|c| c.body.pos.x < CLOUD_RETIRE_X)
        {
            self.clouds.pop();
        }
    }

    /// Crash into the oldest pipe ends the run (once)
    fn check_loss(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let hit = self
            .pipes
            .first()
            .is_some_and(|pipe| pipe.collides_with(&self.duck.collider));
        if hit {
            self.set_phase(GamePhase::End);
            self.emit_sound(SoundCue::Crash, Playback::Play);
        }
    }

    /// Apply one discrete input event
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::BeginFlap => match self.phase {
                GamePhase::Start => self.set_phase(GamePhase::Playing),
                GamePhase::Playing => {
                    if self.duck.flap_down() {
                        self.emit_sound(SoundCue::Flap, Playback::Restart);
                    }
                }
                GamePhase::End => {}
            },
            Action::EndFlap => self.duck.flap_up(),
            Action::Confirm => {
                if self.phase == GamePhase::Start {
                    self.set_phase(GamePhase::Playing);
                }
            }
            Action::Restart => {
                if self.phase == GamePhase::End {
                    self.reset();
                    self.set_phase(GamePhase::Start);
                }
            }
            Action::ToggleMute => self.events.push(GameEvent::ToggleMute),
        }
    }
}
