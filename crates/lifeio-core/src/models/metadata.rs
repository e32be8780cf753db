//! File metadata snapshot and the typed changes applied to it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisualizerError};

/// The seven attributes tracked for the file being created, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MetadataField {
    InodeNumber,
    Permissions,
    Owner,
    Size,
    AccessTime,
    ModifyTime,
    ChangeTime,
}

/// Kind of value a metadata field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
}

impl MetadataField {
    /// Every field, in the order the metadata table shows them.
    pub const ALL: [MetadataField; 7] = [
        MetadataField::InodeNumber,
        MetadataField::Permissions,
        MetadataField::Owner,
        MetadataField::Size,
        MetadataField::AccessTime,
        MetadataField::ModifyTime,
        MetadataField::ChangeTime,
    ];

    /// Key used in serialized output and in command input.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataField::InodeNumber => "inodeNumber",
            MetadataField::Permissions => "permissions",
            MetadataField::Owner => "owner",
            MetadataField::Size => "size",
            MetadataField::AccessTime => "accessTime",
            MetadataField::ModifyTime => "modifyTime",
            MetadataField::ChangeTime => "changeTime",
        }
    }

    /// Human readable label for the metadata table.
    pub fn label(&self) -> &'static str {
        match self {
            MetadataField::InodeNumber => "Inode Number",
            MetadataField::Permissions => "Permissions",
            MetadataField::Owner => "Owner",
            MetadataField::Size => "Size (bytes)",
            MetadataField::AccessTime => "Access Time",
            MetadataField::ModifyTime => "Modify Time",
            MetadataField::ChangeTime => "Change Time",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            MetadataField::InodeNumber | MetadataField::Size => ValueKind::Integer,
            _ => ValueKind::Text,
        }
    }
}

impl FromStr for MetadataField {
    type Err = VisualizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MetadataField::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                VisualizerError::invalid_input("field")
                    .with_reason(format!("unknown metadata field '{s}'"))
            })
    }
}

/// A metadata value: either text or an integer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(&'static str),
    Integer(u64),
}

impl MetadataValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            MetadataValue::Text(_) => ValueKind::Text,
            MetadataValue::Integer(_) => ValueKind::Integer,
        }
    }
}

/// One field update performed when a step becomes active.
///
/// `old_value` is informational only and may be of a different kind than the
/// field (the size field starts out as `"N/A"` in the narrative).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataChange {
    pub field: MetadataField,
    pub old_value: MetadataValue,
    pub new_value: MetadataValue,
}

impl MetadataChange {
    pub const fn new(field: MetadataField, old_value: MetadataValue, new_value: MetadataValue) -> Self {
        Self {
            field,
            old_value,
            new_value,
        }
    }
}

/// Snapshot of the file's metadata at a given step.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub inode_number: u64,
    pub permissions: &'static str,
    pub owner: &'static str,
    pub size: u64,
    pub access_time: &'static str,
    pub modify_time: &'static str,
    pub change_time: &'static str,
}

impl FileMetadata {
    /// Read a field as a [`MetadataValue`].
    pub fn get(&self, field: MetadataField) -> MetadataValue {
        match field {
            MetadataField::InodeNumber => MetadataValue::Integer(self.inode_number),
            MetadataField::Permissions => MetadataValue::Text(self.permissions),
            MetadataField::Owner => MetadataValue::Text(self.owner),
            MetadataField::Size => MetadataValue::Integer(self.size),
            MetadataField::AccessTime => MetadataValue::Text(self.access_time),
            MetadataField::ModifyTime => MetadataValue::Text(self.modify_time),
            MetadataField::ChangeTime => MetadataValue::Text(self.change_time),
        }
    }

    /// Overwrite a field.
    ///
    /// # Errors
    ///
    /// Returns `VisualizerError::FieldTypeMismatch` when the value kind does
    /// not match the field; the snapshot is left untouched.
    pub fn set(&mut self, field: MetadataField, value: MetadataValue) -> Result<()> {
        match (field, value) {
            (MetadataField::InodeNumber, MetadataValue::Integer(n)) => self.inode_number = n,
            (MetadataField::Size, MetadataValue::Integer(n)) => self.size = n,
            (MetadataField::Permissions, MetadataValue::Text(s)) => self.permissions = s,
            (MetadataField::Owner, MetadataValue::Text(s)) => self.owner = s,
            (MetadataField::AccessTime, MetadataValue::Text(s)) => self.access_time = s,
            (MetadataField::ModifyTime, MetadataValue::Text(s)) => self.modify_time = s,
            (MetadataField::ChangeTime, MetadataValue::Text(s)) => self.change_time = s,
            (field, value) => return Err(VisualizerError::FieldTypeMismatch { field, value }),
        }
        Ok(())
    }

    /// Apply a change's new value.
    pub fn apply(&mut self, change: &MetadataChange) -> Result<()> {
        self.set(change.field, change.new_value)
    }
}
