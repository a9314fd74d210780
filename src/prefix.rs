//! Rewriting the numeral prefix of a single heading line.

use regex::Regex;

/// Replaces any existing `1.2.`-style prefix on a heading line with a freshly computed one.
///
/// The strip pattern is built once per marker: the leading marker run, optional whitespace,
/// one or more dot-terminated numeral groups and the whitespace (or line end) after them.
#[derive(Clone, Debug)]
pub struct PrefixRewriter {
    marker: String,
    existing: Regex,
}

impl PrefixRewriter {
    #[must_use]
    /// Build a rewriter for headings introduced by `marker`.
    ///
    /// # Panics
    ///
    /// Panics if the escaped strip pattern fails to compile, which cannot happen for any marker.
    pub fn new(marker: &str) -> Self {
        let pattern = format!(r"^(\s*(?:{})+)\s*(?:\d+\.)+(?:\s+|$)", regex::escape(marker));
        Self {
            marker: marker.to_string(),
            existing: Regex::new(&pattern).expect("escaped marker always forms a valid pattern"),
        }
    }

    #[must_use]
    /// Produce `line` with its prefix replaced by `prefix`, or `None` if `line` is not a heading.
    ///
    /// `depth` is the marker count of the heading. The result is the marker run, a space, the
    /// prefix, a space and the trimmed heading text; a heading without text ends at the prefix,
    /// with no trailing space. Lines that do not contain the marker, or whose marker run is
    /// shorter than `depth`, are refused rather than mangled.
    pub fn rewrite(&self, line: &str, prefix: &str, depth: usize) -> Option<String> {
        if depth == 0 || self.marker.is_empty() {
            return None;
        }
        let stripped = self.existing.replace(line, "${1}");
        let start = stripped.find(&self.marker)?;
        let end = start + depth * self.marker.len();
        let run = stripped.get(start..end)?;
        if run != self.marker.repeat(depth) {
            return None;
        }
        let head = &stripped[..end];
        let text = stripped[end..].trim();
        if text.is_empty() {
            return Some(format!("{head} {prefix}"));
        }
        Some(format!("{head} {prefix} {text}"))
    }
}

#[cfg(test)]
#[path = "tests/prefix.rs"]
mod tests;
