//! Command-line arguments using clap's derive API.
//!
//! Argument structs stay in the CLI crate; handlers turn them into core
//! values ([`PlayerBuilder`], step indices) before calling into
//! `lifeio-core`.

use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand};
use lifeio_core::{PlayerBuilder, Speed};

/// Step-by-step walkthrough of how `touch newfile.txt` travels through the
/// operating system
///
/// Life of IO follows a file-creation request from the shell through the
/// system-call interface, the VFS, the file system, the block layer and the
/// device driver down to physical storage, tracking the new file's metadata
/// at every step.
#[derive(Parser)]
#[command(version, about, name = "lifeio")]
pub struct Args {
    /// Tick interval in milliseconds at 1x speed
    #[arg(
        long,
        global = true,
        env = "LIFEIO_INTERVAL_MS",
        default_value_t = 2000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Without a subcommand the step overview is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// List all steps of the walkthrough
    #[command(alias = "ls")]
    Steps,
    /// Show the canvas, controls and metadata for one step
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Print the file metadata at one step
    #[command(alias = "m")]
    Metadata(MetadataArgs),
    /// Autoplay the walkthrough to the end
    #[command(alias = "p")]
    Play(PlayArgs),
    /// Drive playback with commands typed on stdin
    #[command(alias = "i")]
    Interactive(InteractiveArgs),
}

/// Show one step
#[derive(ClapArgs)]
pub struct ShowArgs {
    #[arg(help = "Step index, starting at 0")]
    pub step: usize,
    #[arg(short, long, help = "Include technical details and the code example")]
    pub details: bool,
}

/// Print the metadata snapshot at one step
#[derive(ClapArgs)]
pub struct MetadataArgs {
    #[arg(help = "Step index, starting at 0")]
    pub step: usize,
    #[arg(long, help = "Print the full snapshot as JSON")]
    pub json: bool,
}

/// Autoplay from a starting step until the last step
#[derive(ClapArgs)]
pub struct PlayArgs {
    #[arg(short, long, help = "Speed multiplier, e.g. 0.5, 1 or 2x")]
    pub speed: Option<Speed>,
    #[arg(long, default_value_t = 0, help = "Step index to start from")]
    pub from: usize,
    #[arg(short, long, help = "Include technical details and the code example")]
    pub details: bool,
}

impl PlayArgs {
    /// Player configuration for these arguments.
    pub fn builder(&self, base_interval: Duration) -> PlayerBuilder {
        PlayerBuilder::new()
            .with_base_interval(base_interval)
            .with_speed(self.speed.map(Speed::value))
            .with_start_step(self.from)
    }
}

/// Interactive session
#[derive(ClapArgs)]
pub struct InteractiveArgs {
    #[arg(short, long, help = "Initial speed multiplier, e.g. 0.5, 1 or 2x")]
    pub speed: Option<Speed>,
    #[arg(short, long, help = "Start with technical details shown")]
    pub details: bool,
}

impl InteractiveArgs {
    /// Player configuration for these arguments.
    pub fn builder(&self, base_interval: Duration) -> PlayerBuilder {
        PlayerBuilder::new()
            .with_base_interval(base_interval)
            .with_speed(self.speed.map(Speed::value))
    }
}
