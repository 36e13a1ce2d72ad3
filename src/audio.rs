//! Sound cues and the audio backend seam
//!
//! The simulation only decides when a cue fires. `AudioManager` turns the
//! session's events into calls on an `AudioSink`, which is whatever actually
//! makes noise (or, in tests and the headless driver, writes it down).

use serde::{Deserialize, Serialize};

use crate::sim::{GameEvent, Playback};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Wing flap, restarted on every successful flap
    Flap,
    /// Pipe passed
    Score,
    /// Duck hit a pipe
    Crash,
    /// Quack on a fresh session or restart
    Restart,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Flap,
        SoundCue::Score,
        SoundCue::Crash,
        SoundCue::Restart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Flap => "flap",
            SoundCue::Score => "score",
            SoundCue::Crash => "crash",
            SoundCue::Restart => "quack",
        }
    }
}

/// An audio backend
pub trait AudioSink {
    /// Start a cue; if it is already playing it carries on
    fn play(&mut self, cue: SoundCue, volume: f32);
    /// Stop the cue and replay it from the beginning
    fn restart(&mut self, cue: SoundCue, volume: f32);
    /// Mute state changed for every cue
    fn set_muted(&mut self, muted: bool);
}

/// Sink that reports cues through the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        log::info!("♪ {} (volume {:.2})", cue.as_str(), volume);
    }

    fn restart(&mut self, cue: SoundCue, volume: f32) {
        log::info!("♪ {} from the top (volume {:.2})", cue.as_str(), volume);
    }

    fn set_muted(&mut self, muted: bool) {
        log::info!("Sound effects {}", if muted { "muted" } else { "unmuted" });
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            self.muted = muted;
            self.sink.set_muted(muted);
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Forward one session event; non-audio events are ignored
    pub fn handle_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Sound { cue, playback } => {
                let vol = self.effective_volume();
                if vol <= 0.0 {
                    return;
                }
                match playback {
                    Playback::Play => self.sink.play(cue, vol),
                    Playback::Restart => self.sink.restart(cue, vol),
                }
            }
            GameEvent::ToggleMute => self.set_muted(!self.muted),
            GameEvent::PhaseChanged { .. } => {}
        }
    }

    pub fn handle_events<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }
}
