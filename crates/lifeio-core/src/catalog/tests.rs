//! Tests for the step catalog and metadata fold.

use std::collections::BTreeSet;

use super::*;
use crate::models::{MetadataChange, MetadataValue};

const fn test_step(id: usize, metadata_changes: &'static [MetadataChange]) -> StepRecord {
    StepRecord {
        id,
        title: "Test",
        description: "Test step",
        color: "#ffffff",
        duration_ms: 0,
        details: &[],
        code_example: None,
        metadata_changes,
    }
}

#[test]
fn test_ids_match_positions() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.len(), 8);
    for (position, step) in catalog.iter().enumerate() {
        assert_eq!(step.id, position);
        assert_eq!(catalog.get(position).unwrap().id, position);
    }
}

#[test]
fn test_standard_catalog_titles() {
    let titles: Vec<_> = Catalog::standard().iter().map(|step| step.title).collect();
    assert_eq!(
        titles,
        vec![
            "Shell Processing",
            "System Call Interface",
            "VFS Layer",
            "File System Layer",
            "Block Layer",
            "Device Driver",
            "Physical Storage",
            "Completion",
        ]
    );
}

#[test]
fn test_standard_catalog_validates() {
    let steps: &'static [StepRecord] = &steps::STEPS;
    assert_eq!(Catalog::new(steps).unwrap(), Catalog::standard());
}

#[test]
fn test_get_out_of_range() {
    let catalog = Catalog::standard();
    match catalog.get(8) {
        Err(VisualizerError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 8);
            assert_eq!(len, 8);
        }
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
    assert!(catalog.compute_metadata(8).is_err());
    assert!(catalog.changed_fields(100).is_err());
}

#[test]
fn test_metadata_overlays() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.compute_metadata(0).unwrap(), INITIAL_METADATA);
    assert_eq!(
        catalog.compute_metadata(catalog.last_index()).unwrap(),
        FINAL_METADATA
    );
}

#[test]
fn test_metadata_after_system_call() {
    let metadata = Catalog::standard().compute_metadata(1).unwrap();
    assert_eq!(metadata.permissions, "rw-rw-r--");
    assert_eq!(metadata.size, 0);
    assert_eq!(metadata.inode_number, INITIAL_METADATA.inode_number);
    assert_eq!(metadata.owner, INITIAL_METADATA.owner);
    assert_eq!(metadata.access_time, INITIAL_METADATA.access_time);
    assert_eq!(metadata.modify_time, INITIAL_METADATA.modify_time);
    assert_eq!(metadata.change_time, INITIAL_METADATA.change_time);
}

#[test]
fn test_file_system_layer_inherits_permissions() {
    let catalog = Catalog::standard();
    let expected: BTreeSet<_> = [
        MetadataField::InodeNumber,
        MetadataField::ModifyTime,
        MetadataField::AccessTime,
        MetadataField::ChangeTime,
    ]
    .into_iter()
    .collect();
    assert_eq!(catalog.changed_fields(3).unwrap(), expected);

    let metadata = catalog.compute_metadata(3).unwrap();
    assert_eq!(metadata.permissions, "rw-rw-r--");
    assert_eq!(metadata.inode_number, 12345);
    assert_eq!(metadata.access_time, "Current time");
    // Owner is only set by the final overlay.
    assert_eq!(metadata.owner, "N/A");
}

#[test]
fn test_steps_without_changes_keep_fold() {
    let catalog = Catalog::standard();
    let after_fs = catalog.compute_metadata(3).unwrap();
    for step in 4..=6 {
        assert_eq!(catalog.compute_metadata(step).unwrap(), after_fs);
        assert!(catalog.changed_fields(step).unwrap().is_empty());
    }
    assert_ne!(after_fs, FINAL_METADATA);
}

#[test]
fn test_changed_fields_are_per_step() {
    let catalog = Catalog::standard();
    let step_one: Vec<_> = catalog.changed_fields(1).unwrap().into_iter().collect();
    assert_eq!(step_one, vec![MetadataField::Permissions, MetadataField::Size]);
    assert!(catalog.changed_fields(0).unwrap().is_empty());
    assert!(catalog.changed_fields(2).unwrap().is_empty());
    assert!(catalog.changed_fields(7).unwrap().is_empty());
}

#[test]
fn test_compute_metadata_is_deterministic() {
    let catalog = Catalog::standard();
    let first = catalog.compute_metadata(2).unwrap();
    for step in [5, 0, 7, 3, 1] {
        catalog.compute_metadata(step).unwrap();
    }
    assert_eq!(catalog.compute_metadata(2).unwrap(), first);
}

#[test]
fn test_later_changes_override_earlier_ones() {
    static CHANGES_A: [MetadataChange; 2] = [
        MetadataChange::new(
            MetadataField::Owner,
            MetadataValue::Text("N/A"),
            MetadataValue::Text("alice"),
        ),
        MetadataChange::new(
            MetadataField::Owner,
            MetadataValue::Text("alice"),
            MetadataValue::Text("bob"),
        ),
    ];
    static CHANGES_B: [MetadataChange; 1] = [MetadataChange::new(
        MetadataField::Owner,
        MetadataValue::Text("bob"),
        MetadataValue::Text("carol"),
    )];
    static STEPS: [StepRecord; 4] = [
        test_step(0, &[]),
        test_step(1, &CHANGES_A),
        test_step(2, &CHANGES_B),
        test_step(3, &[]),
    ];

    let catalog = Catalog::new(&STEPS).unwrap();
    assert_eq!(catalog.compute_metadata(1).unwrap().owner, "bob");
    assert_eq!(catalog.compute_metadata(2).unwrap().owner, "carol");
    assert_eq!(catalog.compute_metadata(3).unwrap(), FINAL_METADATA);
}

#[test]
fn test_fold_skips_step_zero_changes() {
    static CHANGES: [MetadataChange; 1] = [MetadataChange::new(
        MetadataField::Owner,
        MetadataValue::Text("N/A"),
        MetadataValue::Text("root"),
    )];
    static STEPS: [StepRecord; 3] = [test_step(0, &CHANGES), test_step(1, &[]), test_step(2, &[])];

    let catalog = Catalog::new(&STEPS).unwrap();
    assert_eq!(catalog.compute_metadata(0).unwrap(), INITIAL_METADATA);
    assert_eq!(catalog.compute_metadata(1).unwrap(), INITIAL_METADATA);
    assert_eq!(catalog.changed_fields(0).unwrap().len(), 1);
}

#[test]
fn test_new_rejects_bad_tables() {
    static MISNUMBERED: [StepRecord; 2] = [test_step(0, &[]), test_step(2, &[])];
    assert!(matches!(
        Catalog::new(&MISNUMBERED),
        Err(VisualizerError::InvalidCatalog { .. })
    ));

    static ILL_TYPED_CHANGES: [MetadataChange; 1] = [MetadataChange::new(
        MetadataField::Size,
        MetadataValue::Integer(0),
        MetadataValue::Text("big"),
    )];
    static ILL_TYPED: [StepRecord; 1] = [test_step(0, &ILL_TYPED_CHANGES)];
    match Catalog::new(&ILL_TYPED) {
        Err(VisualizerError::InvalidCatalog { reason }) => {
            assert_eq!(reason, "step 0: field 'size' cannot hold value 'big'");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(
        Catalog::new(&[]),
        Err(VisualizerError::InvalidCatalog { .. })
    ));
}
