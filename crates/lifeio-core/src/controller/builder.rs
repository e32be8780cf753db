//! Builder for creating and configuring playback controllers and players.

use std::time::Duration;

use super::{Player, PlaybackController, BASE_INTERVAL};
use crate::{
    catalog::Catalog,
    error::{Result, VisualizerError},
};

/// Builder for creating and configuring [`PlaybackController`] and
/// [`Player`] instances.
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    catalog: Catalog,
    base_interval: Duration,
    speed: Option<f64>,
    start_step: usize,
}

impl PlayerBuilder {
    /// Creates a new builder with default settings: the standard catalog,
    /// a 2 second base interval, 1x speed, starting at step 0.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::standard(),
            base_interval: BASE_INTERVAL,
            speed: None,
            start_step: 0,
        }
    }

    /// Uses a custom step table.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets the tick interval at 1x speed.
    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        self.base_interval = base_interval;
        self
    }

    /// Sets the initial speed multiplier.
    pub fn with_speed(mut self, speed: Option<f64>) -> Self {
        if let Some(speed) = speed {
            self.speed = Some(speed);
        }
        self
    }

    /// Sets the initial step; out-of-range values are clamped.
    pub fn with_start_step(mut self, step: usize) -> Self {
        self.start_step = step;
        self
    }

    /// Builds a stopped controller.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::InvalidSpeed` for a non-positive speed and
    /// `VisualizerError::InvalidInput` for a zero base interval.
    pub fn build(self) -> Result<PlaybackController> {
        if self.base_interval.is_zero() {
            return Err(VisualizerError::invalid_input("base_interval")
                .with_reason("interval must be greater than zero"));
        }

        let mut controller =
            PlaybackController::new(self.catalog).with_base_interval(self.base_interval);
        if let Some(speed) = self.speed {
            controller.set_speed(speed)?;
        }
        controller.seek(self.start_step);
        Ok(controller)
    }

    /// Builds a controller and spawns a player task around it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> Result<Player> {
        Ok(Player::spawn(self.build()?))
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
