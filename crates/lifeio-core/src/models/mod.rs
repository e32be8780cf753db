//! Data models for the step catalog, file metadata and playback state.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation concerns.
//!
//! Catalog data is `'static`: step records, metadata changes and the metadata
//! snapshots all borrow their strings from the compiled-in narrative, which
//! keeps them `Copy` and lets the initial and final snapshots be constants.
//!
//! # Examples
//!
//! ```rust
//! use lifeio_core::models::{FileMetadata, MetadataField, MetadataValue};
//! use lifeio_core::catalog::INITIAL_METADATA;
//!
//! let mut metadata: FileMetadata = INITIAL_METADATA;
//! metadata
//!     .set(MetadataField::Permissions, MetadataValue::Text("rw-rw-r--"))
//!     .unwrap();
//! assert_eq!(metadata.permissions, "rw-rw-r--");
//! assert_eq!(metadata.get(MetadataField::Size), MetadataValue::Integer(0));
//! ```

pub mod metadata;
pub mod playback;
pub mod step;


pub use metadata::{FileMetadata, MetadataChange, MetadataField, MetadataValue, ValueKind};
pub use playback::{PlaybackState, Speed};
pub use step::StepRecord;
