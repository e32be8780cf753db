//! Core library for the Life of IO visualization.
//!
//! This crate models how `touch newfile.txt` travels through the operating
//! system's layers as a fixed sequence of eight steps, and provides the
//! playback machinery that walks through them.
//!
//! # Architecture
//!
//! - **Step Catalog** ([`catalog`]): the ordered narrative, the initial and
//!   final metadata snapshots and the metadata fold
//! - **Playback Controller** ([`controller`]): the synchronous state machine,
//!   its tick handles and the async [`Player`] that drives it on tokio
//! - **Display** ([`display`]): markdown panels built from a [`Snapshot`]
//!
//! # Quick Start
//!
//! ```rust
//! use lifeio_core::{display::MetadataTable, PlayerBuilder, Snapshot};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let player = PlayerBuilder::new().with_speed(Some(2.0)).spawn()?;
//! let mut events = player.subscribe();
//!
//! player.play().await?;
//! while let Ok(event) = events.recv().await {
//!     let snapshot = Snapshot::new(&player.catalog(), event.state())?;
//!     println!("{}", MetadataTable(&snapshot));
//!     if !event.state().is_playing {
//!         break;
//!     }
//! }
//!
//! player.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod commands;
pub mod controller;
pub mod display;
pub mod error;
pub mod layers;
pub mod models;
pub mod snapshot;

// Re-export commonly used types
pub use catalog::{Catalog, FINAL_METADATA, INITIAL_METADATA};
pub use commands::PlaybackCommand;
pub use controller::{
    PendingTick, PlaybackController, Player, PlayerBuilder, PlayerEvent, BASE_INTERVAL,
};
pub use display::{CanvasView, ControlPanel, MetadataTable, PlaybackStatus, StepList};
pub use error::{Result, VisualizerError};
pub use models::{
    FileMetadata, MetadataChange, MetadataField, MetadataValue, PlaybackState, Speed, StepRecord,
};
pub use snapshot::Snapshot;
