//! Life of IO CLI Application
//!
//! Terminal walkthrough of how `touch newfile.txt` travels through the
//! operating system's layers.

mod args;
mod cli;
mod interactive;
mod renderer;

use std::time::Duration;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        interval_ms,
        no_color,
        command,
    } = Args::parse();

    let cli = Cli::new(
        TerminalRenderer::new(!no_color),
        Duration::from_millis(interval_ms),
    );

    info!("Life of IO started");

    match command {
        Some(Commands::Steps) | None => cli.list_steps(),
        Some(Commands::Show(args)) => cli.show_step(&args),
        Some(Commands::Metadata(args)) => cli.show_metadata(&args),
        Some(Commands::Play(args)) => cli.play(&args).await,
        Some(Commands::Interactive(args)) => cli.interactive(&args).await,
    }
}
