//! Playback state and speed multiplier.

use std::{str::FromStr, time::Duration};

use serde::Serialize;

use crate::error::{Result, VisualizerError};

/// Positive playback speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Speed(f64);

impl Speed {
    /// Real-time playback.
    pub const NORMAL: Speed = Speed(1.0);

    /// Speeds offered by the control panel.
    pub const PRESETS: [Speed; 3] = [Speed(0.5), Speed(1.0), Speed(2.0)];

    /// Validate a speed multiplier.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::InvalidSpeed` for zero, negative, NaN or
    /// infinite values.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(VisualizerError::InvalidSpeed { speed: value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Interval between ticks at this speed: `base / speed`.
    ///
    /// Saturates at `Duration::MAX` for vanishingly small speeds.
    pub fn scale(self, base: Duration) -> Duration {
        Duration::try_from_secs_f64(base.as_secs_f64() / self.0).unwrap_or(Duration::MAX)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl FromStr for Speed {
    type Err = VisualizerError;

    /// Accepts `2`, `0.5` or `2x`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix(['x', 'X'])
            .unwrap_or(trimmed)
            .parse::<f64>()
            .map_err(|_| {
                VisualizerError::invalid_input("speed").with_reason(format!("'{s}' is not a number"))
            })?;
        Speed::new(number)
    }
}

/// Current position and mode of the playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Index of the active step, always within the catalog
    pub current_step: usize,

    /// Whether autoplay is running
    pub is_playing: bool,

    /// Speed multiplier applied to the tick interval
    pub speed: Speed,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_step: 0,
            is_playing: false,
            speed: Speed::NORMAL,
        }
    }
}
