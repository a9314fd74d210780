//! The immutable configuration record handed to the indexer.
//!
//! Raw preference values arrive as strings (from `mdindex.toml` or the command line) and are
//! resolved exactly once here. Invalid values never surface as errors: an empty marker falls back
//! to `#` and a start level that is not a positive integer falls back to `1`.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Marker used when none (or an empty one) is configured.
pub const DEFAULT_MARKER: &str = "#";

/// Minimum heading depth used when none (or an invalid one) is configured.
pub const DEFAULT_START_LEVEL: usize = 1;

static START_LEVEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("start level pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq)]
/// Resolved heading marker and the minimum marker count at which numbering begins.
pub struct Settings {
    /// Repeatable marker denoting heading depth, never empty.
    pub marker: String,
    /// Minimum marker count at which numbering begins, always at least 1.
    pub start_level: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            start_level: DEFAULT_START_LEVEL,
        }
    }
}

impl Settings {
    #[must_use]
    /// Resolve raw configuration values, silently replacing invalid ones with the defaults.
    pub fn new(marker: Option<&str>, start_level: Option<&str>) -> Self {
        let marker = match marker {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => {
                debug!("no marker configured, using {DEFAULT_MARKER:?}");
                DEFAULT_MARKER.to_string()
            }
        };
        let start_level = start_level
            .and_then(parse_start_level)
            .unwrap_or_else(|| {
                if let Some(raw) = start_level {
                    debug!("ignoring start level {raw:?}, using {DEFAULT_START_LEVEL}");
                }
                DEFAULT_START_LEVEL
            });
        Self {
            marker,
            start_level,
        }
    }
}

fn parse_start_level(raw: &str) -> Option<usize> {
    if START_LEVEL_PATTERN.is_match(raw) {
        raw.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod tests;
