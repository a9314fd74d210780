//! Heading detection for marker-based outlines.
//!
//! A heading is any line starting with one or more copies of the marker, unless it sits inside a
//! literal region. Literal regions open and close on every line beginning with the fence token,
//! and the open/closed state is carried across the whole document in a single pass.

use crate::settings::Settings;
use log::warn;

/// Line prefix that toggles a literal (code) region on and off.
pub const FENCE: &str = "```";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A line that takes part in numbering.
pub struct Heading {
    /// Index of the line in the document.
    pub line: usize,
    /// Count of leading marker occurrences.
    pub depth: usize,
}

#[must_use]
/// Count the leading occurrences of `marker` in `line`, stopping at the first mismatch.
pub fn marker_depth(line: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    let mut rest = line;
    let mut count = 0;
    while let Some(tail) = rest.strip_prefix(marker) {
        count += 1;
        rest = tail;
    }
    count
}

#[must_use]
/// Whether `line` opens or closes a literal region.
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

#[must_use]
/// Collect every heading at or below the configured start level, in document order.
///
/// Headings inside literal regions and headings shallower than `settings.start_level` are
/// left out entirely, so the numbering pass never sees them.
pub fn scan_headings<S: AsRef<str>>(lines: &[S], settings: &Settings) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_literal = false;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if is_fence(line) {
            in_literal = !in_literal;
            continue;
        }
        if in_literal {
            continue;
        }
        let depth = marker_depth(line, &settings.marker);
        if depth > 0 && depth >= settings.start_level {
            headings.push(Heading { line: index, depth });
        }
    }

    if in_literal {
        warn!("literal region left open at end of document");
    }
    headings
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
