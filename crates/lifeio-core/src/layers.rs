//! The operating-system layer stack drawn by the canvas panel.
//!
//! Each layer lights up once playback reaches its position in the stack and
//! reveals extra content as later steps arrive.

use serde::Serialize;

/// One horizontal band of the canvas.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemLayer {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    /// Content shown once playback reaches the paired step
    pub reveals: &'static [(usize, &'static str)],
}

/// How a layer relates to the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerStatus {
    /// Playback has not got this far yet
    Pending,
    /// Playback passed through this layer
    Reached,
    /// The active step sits on this layer
    Active,
}

pub const SYSTEM_LAYERS: [SystemLayer; 6] = [
    SystemLayer {
        id: "shell",
        name: "Shell",
        color: "#3498db",
        reveals: &[(0, "$ touch newfile.txt")],
    },
    SystemLayer {
        id: "syscall",
        name: "System Calls",
        color: "#e67e22",
        reveals: &[(1, "open(\"newfile.txt\", O_CREAT | O_WRONLY | O_TRUNC, 0666)")],
    },
    SystemLayer {
        id: "vfs",
        name: "VFS Layer",
        color: "#2ecc71",
        reveals: &[(2, "Directory lookup")],
    },
    SystemLayer {
        id: "fs",
        name: "File System",
        color: "#9b59b6",
        reveals: &[
            (3, "Inode #12345"),
            (3, "Directory Entry"),
            (3, "Data Block (0 bytes)"),
        ],
    },
    SystemLayer {
        id: "block",
        name: "Block Layer",
        color: "#f1c40f",
        reveals: &[(4, "Block I/O scheduled")],
    },
    SystemLayer {
        id: "storage",
        name: "Physical Storage",
        color: "#e74c3c",
        reveals: &[(5, "Storage device"), (6, "Sector Written")],
    },
];

impl SystemLayer {
    /// Status of the layer at `position` in the stack for the given step.
    pub fn status(position: usize, current_step: usize) -> LayerStatus {
        if current_step == position {
            LayerStatus::Active
        } else if current_step > position {
            LayerStatus::Reached
        } else {
            LayerStatus::Pending
        }
    }

    /// Content visible at the given step.
    pub fn visible_content(&self, current_step: usize) -> impl Iterator<Item = &'static str> + '_ {
        self.reveals
            .iter()
            .filter(move |(step, _)| current_step >= *step)
            .map(|(_, content)| *content)
    }
}
