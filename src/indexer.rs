//! Hierarchical heading numbering.
//!
//! Each sibling group is a frame on an explicit stack. A frame learns its target depth from the
//! first heading it meets, numbers every heading at exactly that depth, and opens a child frame
//! after each one. A heading at or above the frame's parent depth closes the frame and is looked
//! at again by the frame below it. Gaps in depth are tolerated: under a depth-1 heading, the first
//! depth-3 heading sets the target for that subtree.

use crate::heading::{scan_headings, Heading};
use crate::prefix::PrefixRewriter;
use crate::settings::Settings;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A heading line that was rewritten with a different prefix.
pub struct LineEdit {
    /// Zero-based index of the line in the document.
    pub line: usize,
    /// Marker count of the heading.
    pub depth: usize,
    /// Hierarchical numeral assigned to the heading, e.g. `1.2.`.
    pub prefix: String,
    /// Line content before renumbering.
    pub before: String,
    /// Line content after renumbering.
    pub after: String,
}

/// One sibling group under construction.
struct Frame {
    /// Depth of the heading that opened this group, 0 at the document root.
    parent_depth: usize,
    /// Depth of the headings numbered by this group, taken from the first heading seen.
    target_depth: usize,
    /// Numeral of the enclosing heading, empty at the root.
    prefix: String,
    /// Sequence number the next sibling receives.
    seq: usize,
}

impl Frame {
    fn open(parent_depth: usize, prefix: String, target_depth: usize) -> Self {
        Self {
            parent_depth,
            target_depth,
            prefix,
            seq: 1,
        }
    }
}

/// Renumbers headings in place according to a fixed [`Settings`].
#[derive(Clone, Debug)]
pub struct Indexer {
    settings: Settings,
    rewriter: PrefixRewriter,
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Indexer {
    #[must_use]
    /// Create an indexer for the given marker and start level.
    pub fn new(settings: Settings) -> Self {
        let rewriter = PrefixRewriter::new(&settings.marker);
        Self { settings, rewriter }
    }

    #[must_use]
    /// The settings this indexer numbers with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rewrite every heading line of `lines` with its hierarchical prefix.
    ///
    /// The slice is mutated in place. Lines whose content actually changed are reported back in
    /// document order; a document that is already numbered yields no edits.
    pub fn renumber(&self, lines: &mut [String]) -> Vec<LineEdit> {
        let headings = scan_headings(&*lines, &self.settings);
        let mut edits = Vec::new();

        // `pending` is a group opened by the last numbered heading that has not yet seen a
        // heading to take its target depth from.
        let mut frames: Vec<Frame> = Vec::new();
        let mut pending = Some((0, String::new()));
        let mut cursor = 0;

        while let Some(&Heading { line, depth }) = headings.get(cursor) {
            if let Some((parent_depth, prefix)) = pending.take() {
                frames.push(Frame::open(parent_depth, prefix, depth));
            }
            let Some(frame) = frames.last_mut() else {
                break;
            };

            if depth == frame.target_depth && depth > frame.parent_depth {
                let prefix = format!("{}{}.", frame.prefix, frame.seq);
                frame.seq += 1;
                if let Some(edit) = self.assign(lines, line, depth, &prefix) {
                    edits.push(edit);
                }
                pending = Some((depth, prefix));
                cursor += 1;
            } else if depth <= frame.parent_depth {
                frames.pop();
            } else {
                cursor += 1;
            }
        }

        edits
    }

    #[must_use]
    /// Renumber a whole document held as text, keeping each line's terminator.
    pub fn renumber_text(&self, text: &str) -> String {
        let mut document = crate::input::Document::from_text(text);
        self.renumber(&mut document.lines);
        document.to_text()
    }

    fn assign(
        &self,
        lines: &mut [String],
        line: usize,
        depth: usize,
        prefix: &str,
    ) -> Option<LineEdit> {
        let before = &lines[line];
        let after = self.rewriter.rewrite(before, prefix, depth)?;
        if after == *before {
            return None;
        }
        debug!("line {}: {before:?} -> {after:?}", line + 1);
        let before = std::mem::replace(&mut lines[line], after.clone());
        Some(LineEdit {
            line,
            depth,
            prefix: prefix.to_string(),
            before,
            after,
        })
    }
}

#[cfg(test)]
#[path = "tests/indexer.rs"]
mod tests;
