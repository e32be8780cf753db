//! Collection wrapper types for displaying the step catalog.

use std::fmt;

use crate::catalog::Catalog;

/// Newtype wrapper for displaying the whole catalog as an overview list.
///
/// Each step shows its index, title and description, followed by the metadata
/// fields it updates, if any.
///
/// # Examples
///
/// ```rust
/// use lifeio_core::{display::StepList, Catalog};
///
/// let output = StepList(Catalog::standard()).to_string();
/// assert!(output.contains("## 0. Shell Processing"));
/// assert!(output.contains("- Updates: permissions, size"));
/// ```
pub struct StepList(pub Catalog);

impl fmt::Display for StepList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Life of IO: touch newfile.txt")?;
        writeln!(f)?;

        for step in self.0 {
            writeln!(f, "## {}. {}", step.id, step.title)?;
            writeln!(f)?;
            writeln!(f, "- {}", step.description)?;
            if !step.metadata_changes.is_empty() {
                let fields: Vec<_> = step
                    .metadata_changes
                    .iter()
                    .map(|change| change.field.as_str())
                    .collect();
                writeln!(f, "- Updates: {}", fields.join(", "))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_list_covers_catalog() {
        let output = StepList(Catalog::standard()).to_string();
        assert!(output.starts_with("# Life of IO: touch newfile.txt"));
        assert_eq!(output.matches("\n## ").count(), 8);
        assert!(output.contains("## 7. Completion"));
        assert!(output.contains("- Updates: inodeNumber, modifyTime, accessTime, changeTime"));
        assert_eq!(output.matches("- Updates:").count(), 2);
    }
}
