//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdindex.toml, and if present we load settings from there.
//! This provides the heading marker, the start level, and file extension preferences.

use crate::settings::Settings;
use facet::Facet;
use log::debug;
use std::fs;
use std::path::Path;

/// Preferences file read from the working directory unless another is named.
pub const CONFIG_FILE: &str = "mdindex.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from mdindex.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "#".to_string())]
    /// Repeatable marker that introduces a heading.
    pub index_base: String,
    #[facet(default = "1".to_string())]
    /// Minimum marker count at which numbering begins, as written by the user.
    pub index_start_level: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_base: "#".to_string(),
            index_start_level: "1".to_string(),
            file_extensions: vec!["md".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unparsable.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => debug!("ignoring {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    #[must_use]
    /// Resolve the numbering settings, applying the fallback rules for invalid values.
    pub fn settings(&self) -> Settings {
        Settings::new(Some(&self.index_base), Some(&self.index_start_level))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
