//! Display implementations for domain models.

use std::fmt;

use crate::{
    layers::LayerStatus,
    models::{FileMetadata, MetadataField, MetadataValue, Speed, StepRecord},
};

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(text) => write!(f, "{text}"),
            MetadataValue::Integer(number) => write!(f, "{number}"),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.value())
    }
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in MetadataField::ALL {
            writeln!(f, "- {}: {}", field.label(), self.get(field))?;
        }
        Ok(())
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if !self.details.is_empty() {
            writeln!(f, "#### Technical Details")?;
            writeln!(f)?;
            for detail in self.details {
                writeln!(f, "- {detail}")?;
            }
            writeln!(f)?;
        }

        if let Some(code) = self.code_example {
            writeln!(f, "#### Code Example")?;
            writeln!(f)?;
            writeln!(f, "```")?;
            writeln!(f, "{code}")?;
            writeln!(f, "```")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl LayerStatus {
    /// Marker shown in front of a layer on the canvas.
    ///
    /// - `➤` the active step sits on this layer
    /// - `✓` playback passed through it
    /// - `○` not reached yet
    pub fn icon(&self) -> &'static str {
        match self {
            LayerStatus::Active => "➤",
            LayerStatus::Reached => "✓",
            LayerStatus::Pending => "○",
        }
    }
}
