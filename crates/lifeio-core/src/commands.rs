//! Playback commands shared by every front end.
//!
//! A [`PlaybackCommand`] is the value form of the controller's operations, so
//! the interactive terminal, the async player and tests all go through the
//! same entry point ([`crate::PlaybackController::apply`]). Commands parse
//! from the short words typed at the interactive prompt.

use std::{fmt, str::FromStr};

use crate::error::VisualizerError;

/// A single user-initiated playback action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    TogglePlayPause,
    StepForward,
    StepBackward,
    Restart,
    SetSpeed(f64),
    Seek(usize),
}

impl FromStr for PlaybackCommand {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(VisualizerError::invalid_input("command").with_reason("empty command"));
        };
        let argument = words.next();

        let command = match (verb.to_lowercase().as_str(), argument) {
            ("play", None) => PlaybackCommand::Play,
            ("pause", None) => PlaybackCommand::Pause,
            ("toggle" | "space" | "p", None) => PlaybackCommand::TogglePlayPause,
            ("next" | "n" | "forward", None) => PlaybackCommand::StepForward,
            ("back" | "b" | "prev", None) => PlaybackCommand::StepBackward,
            ("restart" | "r", None) => PlaybackCommand::Restart,
            ("speed", Some(value)) => {
                // Keep the raw number so the controller reports invalid speeds.
                let value = value.strip_suffix(['x', 'X']).unwrap_or(value);
                let speed = value.parse::<f64>().map_err(|_| {
                    VisualizerError::invalid_input("speed")
                        .with_reason(format!("'{value}' is not a number"))
                })?;
                PlaybackCommand::SetSpeed(speed)
            }
            ("seek" | "goto", Some(value)) => {
                let step = value.parse::<usize>().map_err(|_| {
                    VisualizerError::invalid_input("step")
                        .with_reason(format!("'{value}' is not a step number"))
                })?;
                PlaybackCommand::Seek(step)
            }
            ("speed" | "seek" | "goto", None) => {
                return Err(VisualizerError::invalid_input("command")
                    .with_reason(format!("'{verb}' needs a value")));
            }
            _ => {
                return Err(VisualizerError::invalid_input("command")
                    .with_reason(format!("unknown command '{}'", s.trim())));
            }
        };

        if words.next().is_some() {
            return Err(VisualizerError::invalid_input("command")
                .with_reason(format!("too many arguments in '{}'", s.trim())));
        }

        Ok(command)
    }
}

impl fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackCommand::Play => write!(f, "play"),
            PlaybackCommand::Pause => write!(f, "pause"),
            PlaybackCommand::TogglePlayPause => write!(f, "toggle"),
            PlaybackCommand::StepForward => write!(f, "next"),
            PlaybackCommand::StepBackward => write!(f, "back"),
            PlaybackCommand::Restart => write!(f, "restart"),
            PlaybackCommand::SetSpeed(speed) => write!(f, "speed {speed}"),
            PlaybackCommand::Seek(step) => write!(f, "seek {step}"),
        }
    }
}
