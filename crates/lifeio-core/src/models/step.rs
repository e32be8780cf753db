//! Step record definition.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{MetadataChange, MetadataField};

/// One stage of the file-creation narrative.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// Position of the step in the catalog (0-indexed)
    pub id: usize,

    /// Short title shown in the step indicator
    pub title: &'static str,

    /// One-line summary of what happens in this layer
    pub description: &'static str,

    /// Hex color token used by the presentation layer
    pub color: &'static str,

    /// Informational duration; playback timing ignores it
    pub duration_ms: u64,

    /// Technical bullet points
    pub details: &'static [&'static str],

    /// Illustrative code snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<&'static str>,

    /// Metadata updates applied when this step becomes active, in order
    pub metadata_changes: &'static [MetadataChange],
}

impl StepRecord {
    /// Whether this step updates the given field.
    pub fn touches(&self, field: MetadataField) -> bool {
        self.metadata_changes
            .iter()
            .any(|change| change.field == field)
    }

    /// Fields updated by this step alone.
    pub fn changed_fields(&self) -> BTreeSet<MetadataField> {
        self.metadata_changes
            .iter()
            .map(|change| change.field)
            .collect()
    }
}
