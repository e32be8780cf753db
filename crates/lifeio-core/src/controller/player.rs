//! Async driver that runs a [`PlaybackController`] against the tokio clock.
//!
//! The player task is the only owner of the controller. Commands arrive over
//! an `mpsc` channel and are answered over `oneshot` replies; the pending tick
//! is armed as a single deadline inside the same `select!` loop. Commands and
//! ticks are therefore processed one at a time, and a command that arrives
//! while a tick is due is handled first and cancels it.
//!
//! State changes are published on a `broadcast` channel so that any number of
//! presentation panels can follow along.

use log::{debug, warn};
use tokio::{
    sync::{broadcast, mpsc, oneshot},
    task::JoinHandle,
    time::{self, Duration, Instant},
};

use super::PlaybackController;
use crate::{
    catalog::Catalog,
    commands::PlaybackCommand,
    error::{Result, VisualizerError},
    models::PlaybackState,
};

const REQUEST_CAPACITY: usize = 32;
const EVENT_CAPACITY: usize = 64;

/// Notification sent to subscribers after every state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// A command was applied
    Changed(PlaybackState),
    /// A tick advanced the playback by one step
    Advanced(PlaybackState),
    /// Autoplay reached the last step and stopped
    Finished(PlaybackState),
}

impl PlayerEvent {
    pub fn state(&self) -> PlaybackState {
        match self {
            PlayerEvent::Changed(state)
            | PlayerEvent::Advanced(state)
            | PlayerEvent::Finished(state) => *state,
        }
    }
}

enum Request {
    Apply {
        command: PlaybackCommand,
        reply: oneshot::Sender<Result<PlaybackState>>,
    },
    State {
        reply: oneshot::Sender<PlaybackState>,
    },
    Shutdown,
}

/// Handle to a running player task.
///
/// Dropping the handle aborts the task, so no tick can fire after the player
/// is gone. Use [`Player::shutdown`] to stop it and collect the final state.
pub struct Player {
    catalog: Catalog,
    requests: mpsc::Sender<Request>,
    events: broadcast::Sender<PlayerEvent>,
    task: Option<JoinHandle<PlaybackState>>,
}

impl Player {
    /// Spawns the player task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn spawn(controller: PlaybackController) -> Self {
        let catalog = controller.catalog();
        let (requests, receiver) = mpsc::channel(REQUEST_CAPACITY);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let task = tokio::spawn(run(controller, receiver, events.clone()));

        Self {
            catalog,
            requests,
            events,
            task: Some(task),
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Receives every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    /// Applies a command and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns the controller's error (e.g. `InvalidSpeed`), or
    /// `VisualizerError::PlayerStopped` if the task has ended.
    pub async fn send(&self, command: PlaybackCommand) -> Result<PlaybackState> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::Apply { command, reply })
            .await
            .map_err(|_| VisualizerError::PlayerStopped)?;
        response.await.map_err(|_| VisualizerError::PlayerStopped)?
    }

    /// Current state as seen by the player task.
    pub async fn state(&self) -> Result<PlaybackState> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::State { reply })
            .await
            .map_err(|_| VisualizerError::PlayerStopped)?;
        response.await.map_err(|_| VisualizerError::PlayerStopped)
    }

    pub async fn play(&self) -> Result<PlaybackState> {
        self.send(PlaybackCommand::Play).await
    }

    pub async fn pause(&self) -> Result<PlaybackState> {
        self.send(PlaybackCommand::Pause).await
    }

    pub async fn toggle_play_pause(&self) -> Result<PlaybackState> {
        self.send(PlaybackCommand::TogglePlayPause).await
    }

    pub async fn step_forward(&self) -> Result<PlaybackState> {
        self.send(PlaybackCommand::StepForward).await
    }

    pub async fn step_backward(&self) -> Result<PlaybackState> {
        self.send(PlaybackCommand::StepBackward).await
    }

    pub async fn restart(&self) -> Result<PlaybackState> {
        self.send(PlaybackCommand::Restart).await
    }

    pub async fn set_speed(&self, speed: f64) -> Result<PlaybackState> {
        self.send(PlaybackCommand::SetSpeed(speed)).await
    }

    pub async fn seek(&self, index: usize) -> Result<PlaybackState> {
        self.send(PlaybackCommand::Seek(index)).await
    }

    /// Cancels any pending tick, stops the task and returns the final state.
    pub async fn shutdown(mut self) -> Result<PlaybackState> {
        // The task may already be gone; joining below reports that.
        let _ = self.requests.send(Request::Shutdown).await;

        let task = self.task.take().ok_or(VisualizerError::PlayerStopped)?;
        task.await.map_err(|e| {
            warn!("Player task failed: {e}");
            VisualizerError::PlayerStopped
        })
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run(
    mut controller: PlaybackController,
    mut requests: mpsc::Receiver<Request>,
    events: broadcast::Sender<PlayerEvent>,
) -> PlaybackState {
    let mut armed: Option<(u64, Instant)> = None;

    loop {
        armed = rearm(&controller, armed);
        let deadline = armed.map_or_else(Instant::now, |(_, at)| at);

        tokio::select! {
            biased;

            request = requests.recv() => match request {
                Some(Request::Apply { command, reply }) => {
                    let before = controller.state();
                    let result = controller.apply(command).map(|()| controller.state());
                    if let Ok(after) = result {
                        publish(&events, PlayerEvent::Changed(after));
                        if before.is_playing && !after.is_playing && controller.is_finished() {
                            publish(&events, PlayerEvent::Finished(after));
                        }
                    }
                    let _ = reply.send(result);
                }
                Some(Request::State { reply }) => {
                    let _ = reply.send(controller.state());
                }
                Some(Request::Shutdown) | None => break,
            },

            () = time::sleep_until(deadline), if armed.is_some() => {
                if let Some((id, _)) = armed.take() {
                    if controller.fire_tick(id) {
                        let state = controller.state();
                        publish(&events, PlayerEvent::Advanced(state));
                        if !state.is_playing {
                            publish(&events, PlayerEvent::Finished(state));
                        }
                    }
                }
            }
        }
    }

    controller.teardown();
    debug!("Player stopped at step {}", controller.state().current_step);
    controller.state()
}

/// Keeps the armed deadline while the same tick is pending, otherwise arms
/// the new tick from now.
fn rearm(controller: &PlaybackController, armed: Option<(u64, Instant)>) -> Option<(u64, Instant)> {
    match (controller.pending_tick(), armed) {
        (Some(tick), Some((id, at))) if tick.id == id => Some((id, at)),
        (Some(tick), _) => Some((tick.id, deadline_after(tick.delay))),
        (None, _) => None,
    }
}

fn deadline_after(delay: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(delay)
        .unwrap_or_else(|| now + Duration::from_secs(86400 * 365 * 30))
}

fn publish(events: &broadcast::Sender<PlayerEvent>, event: PlayerEvent) {
    // No subscribers is fine.
    let _ = events.send(event);
}
