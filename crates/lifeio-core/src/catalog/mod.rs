//! Step Catalog: the fixed, ordered narrative and the metadata fold over it.
//!
//! The catalog is read-only. Besides indexed lookup it derives the metadata
//! snapshot for any step:
//!
//! - step 0 yields [`INITIAL_METADATA`] exactly,
//! - the last step yields [`FINAL_METADATA`] exactly,
//! - any other step starts from [`INITIAL_METADATA`] and applies the changes
//!   of steps `1..=step` in order.
//!
//! The fold is recomputed from scratch on every call, so the result depends on
//! the step index alone and never on how playback got there.
//!
//! ```rust
//! use lifeio_core::{Catalog, MetadataField};
//!
//! let catalog = Catalog::standard();
//! assert_eq!(catalog.len(), 8);
//!
//! let metadata = catalog.compute_metadata(3).unwrap();
//! assert_eq!(metadata.inode_number, 12345);
//! assert_eq!(metadata.permissions, "rw-rw-r--");
//! assert!(catalog.changed_fields(3).unwrap().contains(&MetadataField::InodeNumber));
//! ```

use std::collections::BTreeSet;

use log::trace;

use crate::{
    error::{Result, VisualizerError},
    models::{FileMetadata, MetadataField, StepRecord},
};

mod steps;

#[cfg(test)]
mod tests;

pub use steps::{FINAL_METADATA, INITIAL_METADATA};

/// Ordered, immutable table of step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    steps: &'static [StepRecord],
}

impl Catalog {
    /// The eight-step `touch newfile.txt` narrative.
    pub fn standard() -> Self {
        Self { steps: &steps::STEPS }
    }

    /// Wrap a custom step table.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::InvalidCatalog` if the table is empty, if a
    /// step's id differs from its position, or if a metadata change does not
    /// fit its field.
    pub fn new(steps: &'static [StepRecord]) -> Result<Self> {
        if steps.is_empty() {
            return Err(VisualizerError::invalid_catalog("a catalog needs at least one step"));
        }

        for (position, step) in steps.iter().enumerate() {
            if step.id != position {
                return Err(VisualizerError::invalid_catalog(format!(
                    "step '{}' has id {} but sits at position {position}",
                    step.title, step.id
                )));
            }

            if let Some(change) = step
                .metadata_changes
                .iter()
                .find(|change| change.new_value.kind() != change.field.kind())
            {
                return Err(VisualizerError::invalid_catalog(format!(
                    "step {position}: field '{}' cannot hold value '{}'",
                    change.field, change.new_value
                )));
            }
        }

        Ok(Self { steps })
    }

    /// Number of steps (`N`).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step (`N - 1`).
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Clamp an index into `[0, N - 1]`.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Look up a step by index.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::IndexOutOfRange` outside `[0, N - 1]`.
    pub fn get(&self, index: usize) -> Result<&'static StepRecord> {
        self.steps
            .get(index)
            .ok_or(VisualizerError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            })
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'static, StepRecord> {
        self.steps.iter()
    }

    /// Derive the metadata snapshot for a step.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::IndexOutOfRange` outside `[0, N - 1]`, and
    /// `VisualizerError::FieldTypeMismatch` if a step carries an ill-typed
    /// change (never the case for validated catalogs).
    pub fn compute_metadata(&self, step: usize) -> Result<FileMetadata> {
        self.get(step)?;

        if step == 0 {
            return Ok(INITIAL_METADATA);
        }
        if step == self.last_index() {
            return Ok(FINAL_METADATA);
        }

        let mut metadata = INITIAL_METADATA;
        for record in self.steps.iter().take(step + 1).skip(1) {
            for change in record.metadata_changes {
                trace!("step {}: {} <- {}", record.id, change.field, change.new_value);
                metadata.apply(change)?;
            }
        }
        Ok(metadata)
    }

    /// Fields touched by the given step alone, not the cumulative fold.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::IndexOutOfRange` outside `[0, N - 1]`.
    pub fn changed_fields(&self, step: usize) -> Result<BTreeSet<MetadataField>> {
        Ok(self.get(step)?.changed_fields())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntoIterator for Catalog {
    type Item = &'static StepRecord;
    type IntoIter = std::slice::Iter<'static, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
