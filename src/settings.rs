//! Game settings
//!
//! Loaded from a JSON file by the driver; any field may be omitted.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_FPS, DEFAULT_PIPE_DENSITY};
use crate::sim::SessionConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Frames per second the driver runs at
    pub fps: f32,
    /// Simulated time per frame; derived from `fps` when absent
    pub time_scale: Option<f32>,

    // === Gameplay ===
    /// Pipes per screen width
    pub pipe_density: u32,
    /// RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,

    // === Debug ===
    /// Show collision boxes
    pub debug_colliders: bool,

    // === Audio ===
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Driver ===
    /// Frames to run before exiting
    pub frames: u64,
    /// Sleep between frames to match `fps`
    pub realtime: bool,
    /// Let the autopilot restart after a crash
    pub auto_restart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: BASE_FPS,
            time_scale: None,

            pipe_density: DEFAULT_PIPE_DENSITY,
            seed: None,

            debug_colliders: false,

            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,

            frames: 30 * 60,
            realtime: false,
            auto_restart: true,
        }
    }
}

/// Failure to read or parse a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Effective frame rate (non-positive values fall back to the base rate)
    pub fn effective_fps(&self) -> f32 {
        if self.fps > 0.0 {
            self.fps
        } else {
            log::warn!("Invalid fps {}, using {}", self.fps, BASE_FPS);
            BASE_FPS
        }
    }

    /// Simulated time per frame: explicit override, else `30 / fps`
    pub fn dt(&self) -> f32 {
        self.time_scale
            .unwrap_or_else(|| BASE_FPS / self.effective_fps())
    }

    /// Wall-clock frame period in milliseconds
    pub fn frame_period_ms(&self) -> f64 {
        1000.0 / self.effective_fps() as f64
    }

    /// Session configuration, drawing a seed from entropy if none was given
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            pipe_density: self.pipe_density,
            dt: self.dt(),
            debug_colliders: self.debug_colliders,
        }
    }
}
