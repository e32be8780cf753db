//! Playback Controller: owns the playback state and mediates every transition.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────────┐    ┌─────────────────┐
//! │  Front ends     │    │   Player task       │    │   Controller    │
//! │ (CLI, REPL,     │───▶│ (mpsc requests,     │───▶│ (state machine, │
//! │  tests)         │    │  one armed timer)   │    │  pending tick)  │
//! └─────────────────┘    └─────────────────────┘    └─────────────────┘
//!                              │ broadcast events
//!                              ▼
//!                        presentation panels
//! ```
//!
//! The controller itself is synchronous and clock-free. Instead of sleeping it
//! hands out a [`PendingTick`], a handle carrying a fresh id and the delay
//! after which the tick should fire. Whoever owns the clock (the async
//! [`Player`], or a test) calls [`PlaybackController::fire_tick`] with that id
//! once the delay has elapsed.
//!
//! Every mutating operation first cancels the outstanding tick and then
//! decides whether to schedule a new one:
//!
//! - while playing and before the last step, a tick is scheduled with delay
//!   `base_interval / speed`;
//! - at the last step nothing is scheduled and playback is forced off, so
//!   autoplay never wraps around.
//!
//! A tick whose id is no longer pending is stale and ignored, which is what
//! keeps a tick scheduled before a restart from advancing the restarted
//! playback.
//!
//! ```rust
//! use lifeio_core::{Catalog, PlaybackController};
//!
//! let mut controller = PlaybackController::new(Catalog::standard());
//! controller.play();
//!
//! let tick = controller.pending_tick().unwrap();
//! assert!(controller.fire_tick(tick.id));
//! assert_eq!(controller.state().current_step, 1);
//! ```

use std::{collections::BTreeSet, time::Duration};

use log::{debug, trace};

use crate::{
    catalog::Catalog,
    commands::PlaybackCommand,
    error::Result,
    models::{FileMetadata, MetadataField, PlaybackState, Speed, StepRecord},
};

pub mod builder;
pub mod player;


pub use builder::PlayerBuilder;
pub use player::{Player, PlayerEvent};

/// Tick interval at 1x speed.
pub const BASE_INTERVAL: Duration = Duration::from_millis(2000);

/// Handle for the single scheduled advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTick {
    /// Identifier to pass back to [`PlaybackController::fire_tick`]
    pub id: u64,
    /// Time to wait before firing, measured from when the tick was scheduled
    pub delay: Duration,
}

/// Owner of [`PlaybackState`] and the pending tick.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    catalog: Catalog,
    state: PlaybackState,
    base_interval: Duration,
    pending: Option<PendingTick>,
    next_tick_id: u64,
}

impl PlaybackController {
    /// Creates a stopped controller at step 0 and 1x speed.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: PlaybackState::default(),
            base_interval: BASE_INTERVAL,
            pending: None,
            next_tick_id: 0,
        }
    }

    /// Replaces the 1x tick interval.
    pub fn with_base_interval(mut self, base_interval: Duration) -> Self {
        self.base_interval = base_interval;
        self.reschedule();
        self
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    /// The outstanding tick, if autoplay is waiting on one.
    pub fn pending_tick(&self) -> Option<PendingTick> {
        self.pending
    }

    /// Record of the active step.
    pub fn current_step(&self) -> Result<&'static StepRecord> {
        self.catalog.get(self.state.current_step)
    }

    /// Metadata snapshot for the active step.
    pub fn metadata(&self) -> Result<FileMetadata> {
        self.catalog.compute_metadata(self.state.current_step)
    }

    /// Fields touched by the active step.
    pub fn changed_fields(&self) -> Result<BTreeSet<MetadataField>> {
        self.catalog.changed_fields(self.state.current_step)
    }

    /// Whether the active step is the final one.
    pub fn is_finished(&self) -> bool {
        self.state.current_step >= self.catalog.last_index()
    }

    pub fn play(&mut self) {
        self.set_playing(true);
    }

    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    pub fn toggle_play_pause(&mut self) {
        self.set_playing(!self.state.is_playing);
    }

    /// Advances one step, stopping at the last one.
    pub fn step_forward(&mut self) {
        self.move_to(self.state.current_step.saturating_add(1));
    }

    /// Goes back one step, stopping at the first one.
    pub fn step_backward(&mut self) {
        self.move_to(self.state.current_step.saturating_sub(1));
    }

    /// Jumps to a step, clamped into the catalog.
    pub fn seek(&mut self, index: usize) {
        self.move_to(index);
    }

    /// Back to step 0, paused.
    pub fn restart(&mut self) {
        self.state.current_step = 0;
        self.state.is_playing = false;
        debug!("Playback restarted");
        self.reschedule();
    }

    /// Changes the speed multiplier.
    ///
    /// While playing, the pending tick is replaced by one at the new interval.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::InvalidSpeed` for non-positive values,
    /// leaving the state and the pending tick untouched.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        let speed = Speed::new(speed)?;
        if speed == self.state.speed {
            return Ok(());
        }

        debug!("Speed {} -> {}", self.state.speed, speed);
        self.state.speed = speed;
        self.reschedule();
        Ok(())
    }

    /// Dispatches a command to the matching operation.
    pub fn apply(&mut self, command: PlaybackCommand) -> Result<()> {
        match command {
            PlaybackCommand::Play => self.play(),
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::TogglePlayPause => self.toggle_play_pause(),
            PlaybackCommand::StepForward => self.step_forward(),
            PlaybackCommand::StepBackward => self.step_backward(),
            PlaybackCommand::Restart => self.restart(),
            PlaybackCommand::SetSpeed(speed) => self.set_speed(speed)?,
            PlaybackCommand::Seek(index) => self.seek(index),
        }
        Ok(())
    }

    /// Fires a previously scheduled tick.
    ///
    /// Returns `true` if the tick was the pending one and the playback
    /// advanced; stale ticks are ignored.
    pub fn fire_tick(&mut self, id: u64) -> bool {
        match self.pending {
            Some(tick) if tick.id == id => {
                self.pending = None;
                self.state.current_step = self.catalog.clamp(self.state.current_step + 1);
                debug!("Tick {id} advanced to step {}", self.state.current_step);
                self.reschedule();
                true
            }
            _ => {
                trace!("Ignoring stale tick {id}");
                false
            }
        }
    }

    /// Cancels the pending tick and stops playback.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.state.is_playing = false;
    }

    fn set_playing(&mut self, playing: bool) {
        self.state.is_playing = playing;
        self.reschedule();
    }

    fn move_to(&mut self, index: usize) {
        self.state.current_step = self.catalog.clamp(index);
        self.reschedule();
    }

    /// Cancels the outstanding tick, then schedules a new one if autoplay
    /// should continue from the current state.
    fn reschedule(&mut self) {
        if let Some(tick) = self.pending.take() {
            trace!("Cancelled tick {}", tick.id);
        }

        if !self.state.is_playing {
            return;
        }

        if self.is_finished() {
            debug!("Reached step {}, playback stopped", self.state.current_step);
            self.state.is_playing = false;
            return;
        }

        self.next_tick_id += 1;
        let tick = PendingTick {
            id: self.next_tick_id,
            delay: self.state.speed.scale(self.base_interval),
        };
        trace!("Scheduled tick {} in {:?}", tick.id, tick.delay);
        self.pending = Some(tick);
    }
}
