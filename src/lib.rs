//! mdindex: hierarchical numbering for marker-based document outlines.
//!
//! Headings such as `## Background` are rewritten to `## 1.2. Background`, where the numeral
//! reflects the heading's place among its siblings and ancestors. Fenced code blocks are left
//! alone and stale numerals are replaced, so running the tool twice changes nothing.
//!
//! ```
//! use mdindex::{indexer::Indexer, settings::Settings};
//!
//! let indexer = Indexer::new(Settings::default());
//! let mut lines = vec!["# Intro".to_string(), "## Scope".to_string()];
//! indexer.renumber(&mut lines);
//! assert_eq!(lines, ["# 1. Intro", "## 1.1. Scope"]);
//! ```

pub mod cli;
pub mod config;
pub mod edit_plan;
pub mod error;
pub mod heading;
pub mod indexer;
pub mod input;
pub mod prefix;
pub mod settings;

pub use error::{Error, Result};
