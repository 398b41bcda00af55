//! Runtime settings
//!
//! Loaded from a JSON file named by `BREAKOUT_SETTINGS`. Missing fields take
//! their defaults; an unreadable or malformed file falls back to defaults with
//! a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TARGET_FPS;
use crate::sim::Tuning;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "BREAKOUT_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("target_fps must be greater than zero")]
    ZeroFrameRate,
    #[error("tuning.starting_lives must be greater than zero")]
    NoLives,
    #[error("tuning.{field} must be a finite number greater than zero, got {value}")]
    InvalidSpeed { field: &'static str, value: f32 },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame pacing target; integration still uses the measured delta
    pub target_fps: u32,
    /// Ball/paddle speeds and starting lives
    pub tuning: Tuning,
    /// Stop after this many frames (headless runs); `None` runs until quit
    pub frame_limit: Option<u64>,
    /// Seed for the headless input masher
    pub input_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            tuning: Tuning::default(),
            frame_limit: Some(900),
            input_seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would leave the game unplayable
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_fps == 0 {
            return Err(SettingsError::ZeroFrameRate);
        }
        if self.tuning.starting_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        for (field, value) in [
            ("ball_speed", self.tuning.ball_speed),
            ("paddle_speed", self.tuning.paddle_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidSpeed { field, value });
            }
        }
        Ok(())
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `BREAKOUT_SETTINGS`, or use defaults
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Ignoring settings file {}: {}",
                    path.to_string_lossy(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
