//! Command handlers for the `lifeio` binary.
//!
//! Every handler builds a [`Snapshot`] from core state and hands the markdown
//! produced by the core's display wrappers to the [`TerminalRenderer`].

use std::time::Duration;

use anyhow::{Context, Result};
use lifeio_core::{
    display::{CanvasView, ControlPanel, MetadataTable, StepList},
    Catalog, PlaybackState, PlayerEvent, Snapshot,
};
use log::{debug, warn};
use tokio::sync::broadcast::error::RecvError;

use crate::{
    args::{MetadataArgs, PlayArgs, ShowArgs},
    renderer::TerminalRenderer,
};

/// Handler for CLI commands.
pub struct Cli {
    pub(crate) renderer: TerminalRenderer,
    pub(crate) catalog: Catalog,
    pub(crate) base_interval: Duration,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, base_interval: Duration) -> Self {
        Self {
            renderer,
            catalog: Catalog::standard(),
            base_interval,
        }
    }

    /// Print the step overview.
    pub fn list_steps(&self) -> Result<()> {
        self.renderer.render(&StepList(self.catalog).to_string())
    }

    /// Print all panels for one step.
    pub fn show_step(&self, args: &ShowArgs) -> Result<()> {
        let snapshot = Snapshot::at_step(&self.catalog, args.step)
            .with_context(|| format!("Cannot show step {}", args.step))?;
        self.render_snapshot(&snapshot, args.details)
    }

    /// Print the metadata table or the JSON snapshot for one step.
    pub fn show_metadata(&self, args: &MetadataArgs) -> Result<()> {
        let snapshot = Snapshot::at_step(&self.catalog, args.step)
            .with_context(|| format!("Cannot compute metadata for step {}", args.step))?;

        if args.json {
            println!("{}", snapshot.to_json().context("Failed to serialize snapshot")?);
            Ok(())
        } else {
            self.renderer.render(&MetadataTable(&snapshot).to_string())
        }
    }

    /// Autoplay to the last step, rendering every step as it becomes active.
    pub async fn play(&self, args: &PlayArgs) -> Result<()> {
        let player = args
            .builder(self.base_interval)
            .spawn()
            .context("Failed to start playback")?;
        let mut events = player.subscribe();

        let state = player.play().await.context("Failed to start playback")?;
        self.render_state(state, args.details)?;

        if state.is_playing {
            loop {
                match events.recv().await {
                    Ok(PlayerEvent::Advanced(state)) => self.render_state(state, args.details)?,
                    Ok(PlayerEvent::Finished(state)) => {
                        debug!("Playback finished at step {}", state.current_step);
                        break;
                    }
                    Ok(PlayerEvent::Changed(_)) => {}
                    Err(RecvError::Lagged(skipped)) => warn!("Skipped {skipped} playback events"),
                    Err(RecvError::Closed) => break,
                }
            }
        }

        player.shutdown().await.context("Failed to stop playback")?;
        Ok(())
    }

    pub(crate) fn render_state(&self, state: PlaybackState, details: bool) -> Result<()> {
        let snapshot = Snapshot::new(&self.catalog, state).context("Invalid playback state")?;
        self.render_snapshot(&snapshot, details)
    }

    fn render_snapshot(&self, snapshot: &Snapshot, details: bool) -> Result<()> {
        let frame = format!(
            "{}\n{}\n{}\n",
            CanvasView(snapshot),
            ControlPanel::new(snapshot).with_details(details),
            MetadataTable(snapshot)
        );
        self.renderer.render(&frame)
    }
}
