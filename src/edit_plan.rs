//! The edit plan records heading rewrites so they can be reviewed before touching disk.
//!
//! `mdindex --plan` prints a plan instead of writing files, and `mdindex --apply-plan` replays
//! one later. Every edit carries the line content it expects to replace, so a plan made against
//! an older version of a file is refused rather than applied on top of unrelated text.

use crate::error::{Error, Result};
use crate::indexer::LineEdit;
use crate::input::Document;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of heading rewrites across files.
pub struct EditPlan {
    /// Individual line replacements, grouped by file when applied.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Replacement of one heading line.
pub struct Edit {
    /// Target file path for this modification.
    pub file_name: String,
    /// One-based line number of the heading.
    pub line: usize,
    /// Marker count of the heading.
    pub depth: usize,
    /// Numeral assigned to the heading.
    pub prefix: String,
    /// Line content the edit expects to find.
    pub before: String,
    /// Line content written in its place.
    pub after: String,
}

impl EditPlan {
    /// Record the rewrites made to one file.
    pub fn extend(&mut self, file_name: &str, edits: Vec<LineEdit>) {
        self.edits.extend(edits.into_iter().map(|edit| Edit {
            file_name: file_name.to_string(),
            line: edit.line + 1,
            depth: edit.depth,
            prefix: edit.prefix,
            before: edit.before,
            after: edit.after,
        }));
    }

    #[must_use]
    /// Whether the plan contains no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply all edits in the plan, returning the files that were written.
    ///
    /// Every file is loaded and every edit verified before anything is written, so a stale or
    /// out-of-range edit in any file leaves the disk untouched. Writes are not transactional: if
    /// saving one file fails, files saved before it keep their new content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLine`] or [`Error::StaleEdit`] if an edit no longer matches its
    /// file, or an I/O error if a file cannot be read or written.
    pub fn apply(&self) -> Result<Vec<PathBuf>> {
        let mut file_groups: HashMap<&str, Vec<&Edit>> = HashMap::new();
        for edit in &self.edits {
            file_groups.entry(edit.file_name.as_str()).or_default().push(edit);
        }

        let mut patched = Vec::with_capacity(file_groups.len());
        for (file_name, edits) in file_groups {
            let path = PathBuf::from(file_name);
            let mut document = Document::load(&path)?;
            for edit in edits {
                let slot = edit
                    .line
                    .checked_sub(1)
                    .and_then(|index| document.lines.get_mut(index))
                    .ok_or_else(|| Error::MissingLine {
                        file: edit.file_name.clone(),
                        line: edit.line,
                    })?;
                if *slot != edit.before {
                    return Err(Error::StaleEdit {
                        file: edit.file_name.clone(),
                        line: edit.line,
                        expected: edit.before.clone(),
                        found: slot.clone(),
                    });
                }
                slot.clone_from(&edit.after);
            }
            patched.push((path, document));
        }

        patched.sort_by(|a, b| a.0.cmp(&b.0));
        let mut written = Vec::with_capacity(patched.len());
        for (path, document) in patched {
            document.save(&path)?;
            info!("applied plan to {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
