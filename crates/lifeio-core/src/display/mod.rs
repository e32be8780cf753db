//! Markdown presentation of the visualization.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the panels of the visualization are wrapper types that borrow a
//! [`crate::Snapshot`] and format it for one context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Snapshot     │    │  Panel wrappers │    │    Markdown     │
//! │ (state, step,   │───▶│ (CanvasView,    │───▶│ (terminal       │
//! │  metadata)      │    │  ControlPanel,  │    │  renderer)      │
//! │                 │    │  MetadataTable) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`panels`]: The canvas, control panel and metadata table
//! - [`collections`]: The step list
//! - [`status`]: One-line playback status
//!
//! ## Usage Examples
//!
//! ```rust
//! use lifeio_core::{
//!     display::{ControlPanel, MetadataTable},
//!     Catalog, Snapshot,
//! };
//!
//! let snapshot = Snapshot::at_step(&Catalog::standard(), 1).unwrap();
//!
//! let controls = ControlPanel::new(&snapshot).with_details(true).to_string();
//! assert!(controls.contains("Step 2 of 8"));
//! assert!(controls.contains("Technical Details"));
//!
//! let table = MetadataTable(&snapshot).to_string();
//! assert!(table.contains("Permissions: rw-rw-r-- ← changed"));
//! ```

pub mod collections;
pub mod models;
pub mod panels;
pub mod status;

pub use collections::StepList;
pub use panels::{CanvasView, ControlPanel, MetadataTable};
pub use status::PlaybackStatus;
