//! Interactive session: playback commands read line by line from stdin.
//!
//! Input and playback events are multiplexed in one `select!` loop, so
//! autoplay keeps rendering while the prompt waits for the next command.
//! Frames are drawn from the event stream only, in the order the player
//! applied them, and pending events are drained before the next line is
//! read. When stdin is exhausted an ongoing autoplay is allowed to finish.

use anyhow::{Context, Result};
use lifeio_core::{
    display::{MetadataTable, PlaybackStatus},
    PlaybackCommand, Player, PlayerEvent, Snapshot,
};
use log::{debug, warn};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::broadcast::error::RecvError,
};

use crate::{args::InteractiveArgs, cli::Cli};

const HELP: &str = "\
## Commands

- `play`, `pause`, `toggle` (or `p`)
- `next` (or `n`), `back` (or `b`), `restart` (or `r`)
- `speed <X>` e.g. `speed 0.5`, `seek <STEP>`
- `details` (or `d`) to show or hide technical details
- `metadata` (or `m`), `state`, `help`, `quit` (or `q`)
";

enum Flow {
    Continue,
    Quit,
}

impl Cli {
    /// Run an interactive session until `quit` or the end of input.
    pub async fn interactive(&self, args: &InteractiveArgs) -> Result<()> {
        let player = args
            .builder(self.base_interval)
            .spawn()
            .context("Failed to start playback")?;
        let mut events = player.subscribe();
        let mut details = args.details;
        let mut lines = BufReader::new(io::stdin()).lines();
        let mut input_open = true;

        self.render_state(player.state().await?, details)?;
        self.renderer.render(HELP)?;

        loop {
            tokio::select! {
                biased;

                event = events.recv() => match event {
                    Ok(PlayerEvent::Changed(state) | PlayerEvent::Advanced(state)) => {
                        self.render_state(state, details)?;
                    }
                    Ok(PlayerEvent::Finished(_)) if !input_open => break,
                    Ok(PlayerEvent::Finished(_)) => {}
                    Err(RecvError::Lagged(skipped)) => warn!("Skipped {skipped} playback events"),
                    Err(RecvError::Closed) => break,
                },

                line = lines.next_line(), if input_open => {
                    match line.context("Failed to read input")? {
                        Some(line) => {
                            if let Flow::Quit = self.handle_line(&player, &line, &mut details).await? {
                                break;
                            }
                        }
                        None => {
                            debug!("End of input");
                            input_open = false;
                            if !player.state().await?.is_playing {
                                break;
                            }
                        }
                    }
                }
            }
        }

        player.shutdown().await.context("Failed to stop playback")?;
        Ok(())
    }

    async fn handle_line(&self, player: &Player, line: &str, details: &mut bool) -> Result<Flow> {
        let input = line.trim();
        match input.to_lowercase().as_str() {
            "" => {}
            "q" | "quit" | "exit" => return Ok(Flow::Quit),
            "h" | "help" | "?" => self.renderer.render(HELP)?,
            "d" | "details" => {
                *details = !*details;
                self.render_state(player.state().await?, *details)?;
            }
            "state" => {
                let status = PlaybackStatus::new(player.state().await?, self.catalog.len());
                self.renderer.render(&status.to_string())?;
            }
            "m" | "metadata" => {
                let snapshot = Snapshot::new(&self.catalog, player.state().await?)?;
                self.renderer.render(&MetadataTable(&snapshot).to_string())?;
            }
            _ => match input.parse::<PlaybackCommand>() {
                // The resulting frame arrives as a `Changed` event.
                Ok(command) => {
                    if let Err(e) = player.send(command).await {
                        eprintln!("Error: {e}");
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            },
        }
        Ok(Flow::Continue)
    }
}
