//! One-line playback status.

use std::fmt;

use crate::models::PlaybackState;

/// Compact status line: position, mode and speed.
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub total_steps: usize,
}

impl PlaybackStatus {
    pub fn new(state: PlaybackState, total_steps: usize) -> Self {
        Self { state, total_steps }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.state.is_playing {
            "▶ Playing"
        } else {
            "⏸ Paused"
        };
        writeln!(
            f,
            "Step {} of {} | {} | Speed {}",
            self.state.current_step + 1,
            self.total_steps,
            mode,
            self.state.speed
        )
    }
}
