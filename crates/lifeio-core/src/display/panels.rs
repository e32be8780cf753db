//! The three panels of the visualization.
//!
//! Each panel borrows a [`Snapshot`] and renders it as markdown. Panels are
//! pure consumers: they never touch the controller.

use std::fmt;

use super::status::PlaybackStatus;
use crate::{
    layers::{SystemLayer, SYSTEM_LAYERS},
    models::{MetadataField, Speed},
    snapshot::Snapshot,
};

/// Marker appended to metadata rows updated by the active step.
pub const CHANGED_MARKER: &str = "← changed";

/// The layer stack and the data-flow trail.
pub struct CanvasView<'a>(pub &'a Snapshot);

impl fmt::Display for CanvasView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.0.state.current_step;

        writeln!(f, "## File Creation Process Visualization")?;
        writeln!(f)?;
        writeln!(f, "Current step: **{}**", self.0.step.title)?;
        writeln!(f)?;

        for (position, layer) in SYSTEM_LAYERS.iter().enumerate() {
            let status = SystemLayer::status(position, current);
            let content: Vec<_> = layer.visible_content(current).collect();
            if content.is_empty() {
                writeln!(f, "- {} {}", status.icon(), layer.name)?;
            } else {
                writeln!(
                    f,
                    "- {} {}: `{}`",
                    status.icon(),
                    layer.name,
                    content.join("`, `")
                )?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Data flow: {}", self.0.trail.join(" → "))
    }
}

/// Step indicator, description and, on request, the technical details.
pub struct ControlPanel<'a> {
    snapshot: &'a Snapshot,
    show_details: bool,
}

impl<'a> ControlPanel<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            show_details: false,
        }
    }

    /// Include the technical bullets and the code example.
    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }
}

impl fmt::Display for ControlPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.snapshot.step;

        writeln!(f, "## Animation Controls")?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            PlaybackStatus::new(self.snapshot.state, self.snapshot.total_steps)
        )?;
        let speeds: Vec<_> = Speed::PRESETS
            .iter()
            .map(|&speed| {
                if speed == self.snapshot.state.speed {
                    format!("**{speed}**")
                } else {
                    speed.to_string()
                }
            })
            .collect();
        writeln!(f, "Speeds: {}", speeds.join(" · "))?;
        writeln!(f)?;
        writeln!(f, "### {}", step.title)?;
        writeln!(f)?;
        writeln!(f, "{}", step.description)?;

        if self.show_details {
            writeln!(f)?;
            writeln!(f, "#### Technical Details")?;
            writeln!(f)?;
            for detail in step.details {
                writeln!(f, "- {detail}")?;
            }

            if let Some(code) = step.code_example {
                writeln!(f)?;
                writeln!(f, "#### Code Example")?;
                writeln!(f)?;
                writeln!(f, "```")?;
                writeln!(f, "{code}")?;
                writeln!(f, "```")?;
            }
        }

        Ok(())
    }
}

/// The seven metadata rows with the fields changed by the active step marked.
pub struct MetadataTable<'a>(pub &'a Snapshot);

impl fmt::Display for MetadataTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## File Metadata")?;
        writeln!(f)?;
        writeln!(f, "Tracking changes during file creation")?;
        writeln!(f)?;

        for field in MetadataField::ALL {
            let value = self.0.metadata.get(field);
            if self.0.is_changed(field) {
                writeln!(f, "- {}: {value} {CHANGED_MARKER}", field.label())?;
            } else {
                writeln!(f, "- {}: {value}", field.label())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "*{CHANGED_MARKER}: Changed in current step*")
    }
}
