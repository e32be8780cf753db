//! A complete, serializable view of one moment of the playback.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    catalog::Catalog,
    controller::PlaybackController,
    error::Result,
    models::{FileMetadata, MetadataField, PlaybackState, StepRecord},
};

/// Everything a presentation panel needs to draw the current step.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub state: PlaybackState,
    pub total_steps: usize,
    pub step: &'static StepRecord,
    pub metadata: FileMetadata,
    pub changed_fields: BTreeSet<MetadataField>,
    /// Titles of the steps played so far, including the active one
    pub trail: Vec<&'static str>,
}

impl Snapshot {
    /// Derive the snapshot for a playback state.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::IndexOutOfRange` if the state's step is not
    /// in the catalog.
    pub fn new(catalog: &Catalog, state: PlaybackState) -> Result<Self> {
        Ok(Self {
            state,
            total_steps: catalog.len(),
            step: catalog.get(state.current_step)?,
            metadata: catalog.compute_metadata(state.current_step)?,
            changed_fields: catalog.changed_fields(state.current_step)?,
            trail: catalog
                .iter()
                .take(state.current_step + 1)
                .map(|step| step.title)
                .collect(),
        })
    }

    /// Snapshot of a stopped playback at the given step.
    pub fn at_step(catalog: &Catalog, step: usize) -> Result<Self> {
        Self::new(
            catalog,
            PlaybackState {
                current_step: step,
                ..PlaybackState::default()
            },
        )
    }

    pub fn from_controller(controller: &PlaybackController) -> Result<Self> {
        Self::new(&controller.catalog(), controller.state())
    }

    /// Whether the field was updated by the active step.
    pub fn is_changed(&self, field: MetadataField) -> bool {
        self.changed_fields.contains(&field)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INITIAL_METADATA;

    #[test]
    fn test_snapshot_at_step() {
        let snapshot = Snapshot::at_step(&Catalog::standard(), 1).unwrap();
        assert_eq!(snapshot.total_steps, 8);
        assert_eq!(snapshot.step.title, "System Call Interface");
        assert!(snapshot.is_changed(MetadataField::Permissions));
        assert!(!snapshot.is_changed(MetadataField::Owner));
        assert_eq!(snapshot.trail, vec!["Shell Processing", "System Call Interface"]);
    }

    #[test]
    fn test_snapshot_out_of_range() {
        assert!(Snapshot::at_step(&Catalog::standard(), 8).is_err());
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = Snapshot::at_step(&Catalog::standard(), 0).unwrap();
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["state"]["currentStep"], 0);
        assert_eq!(json["totalSteps"], 8);
        assert_eq!(json["step"]["title"], "Shell Processing");
        assert_eq!(json["metadata"]["permissions"], INITIAL_METADATA.permissions);
        assert_eq!(json["metadata"]["accessTime"], "Not created yet");
        assert_eq!(json["changedFields"], serde_json::json!([]));
    }

    #[test]
    fn test_snapshot_json_lists_changed_fields_in_table_order() {
        let snapshot = Snapshot::at_step(&Catalog::standard(), 3).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json["changedFields"],
            serde_json::json!(["inodeNumber", "accessTime", "modifyTime", "changeTime"])
        );
        assert_eq!(json["metadata"]["inodeNumber"], 12345);
    }
}
