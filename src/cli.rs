//! Command-line surface: argument parsing and the renumbering run behind it.
//!
//! Output meant for the user (renumbered text, `--check` listings, plans) goes to the writer
//! handed to [`run`]; progress goes through `log`.

use crate::config::{Config, CONFIG_FILE};
use crate::edit_plan::EditPlan;
use crate::error::{Error, Result};
use crate::indexer::Indexer;
use crate::input::{find_documents, Document};
use clap::Parser;
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdindex")]
#[command(about = "Hierarchical numbering for markdown headings", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
/// Command-line arguments of the `mdindex` binary.
pub struct Args {
    /// Files or directories to renumber
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Heading marker (defaults to "#")
    #[arg(long, short = 'm', value_name = "MARKER")]
    pub marker: Option<String>,

    /// Minimum marker count at which numbering begins
    #[arg(long, short = 's', value_name = "LEVEL")]
    pub start_level: Option<String>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    pub ext: Vec<String>,

    /// Preferences file to read
    #[arg(long, value_name = "FILE", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// List files whose numbering is out of date without writing them
    #[arg(long, conflicts_with_all = ["stdout", "plan"])]
    pub check: bool,

    /// Print renumbered documents instead of writing them
    #[arg(long, conflicts_with = "plan")]
    pub stdout: bool,

    /// Print the edits as a JSON plan instead of writing them
    #[arg(long)]
    pub plan: bool,

    /// Apply a JSON plan produced by --plan
    #[arg(long, value_name = "FILE", conflicts_with_all = ["check", "stdout", "plan"])]
    pub apply_plan: Option<PathBuf>,

    /// Log every rewritten heading
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a successful run ended.
pub enum Outcome {
    /// Nothing left to report.
    Done,
    /// `--check` found documents whose numbering is out of date.
    Outdated,
}

#[must_use]
/// Process exit status for a run: 0 when done, 1 when `--check` found outdated files, 2 on error.
pub fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::Outdated) => 1,
        Err(_) => 2,
    }
}

/// Renumber the documents named by `args`, writing user-facing output to `out`.
///
/// # Errors
///
/// Returns an error if a path or plan cannot be read, a document cannot be written, a plan is
/// invalid or stale, or `out` cannot be written to.
pub fn run(args: Args, out: &mut impl Write) -> Result<Outcome> {
    if let Some(plan_path) = args.apply_plan {
        let contents = fs::read_to_string(&plan_path).map_err(|source| Error::Read {
            path: plan_path.clone(),
            source,
        })?;
        let plan: EditPlan = serde_json::from_str(&contents)?;
        let written = plan.apply()?;
        info!("applied {} edits to {} files", plan.edits.len(), written.len());
        return Ok(Outcome::Done);
    }

    let mut cfg = Config::load_from(&args.config);

    // Override config with command line args
    if let Some(marker) = args.marker {
        cfg.index_base = marker;
    }
    if let Some(start_level) = args.start_level {
        cfg.index_start_level = start_level;
    }
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let indexer = Indexer::new(cfg.settings());
    let documents = find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        warn!("No matching files found");
        return Ok(Outcome::Done);
    }

    let mut plan = EditPlan::default();
    let mut outdated = 0;

    for path in &documents {
        let mut document = match Document::load(path) {
            Ok(document) => document,
            Err(e) => {
                warn!("skipping {e}");
                continue;
            }
        };
        let edits = indexer.renumber(&mut document.lines);

        if args.stdout {
            write!(out, "{}", document.to_text()).map_err(Error::Output)?;
            continue;
        }
        if edits.is_empty() {
            debug!("{} is up to date", path.display());
            continue;
        }
        outdated += 1;

        if args.check {
            writeln!(out, "{}", path.display()).map_err(Error::Output)?;
        } else if args.plan {
            plan.extend(&path.to_string_lossy(), edits);
        } else {
            document.save(path)?;
            info!("renumbered {} headings in {}", edits.len(), path.display());
        }
    }

    if args.plan {
        let json = serde_json::to_string_pretty(&plan)?;
        writeln!(out, "{json}").map_err(Error::Output)?;
    }

    if args.check && outdated > 0 {
        return Ok(Outcome::Outdated);
    }
    Ok(Outcome::Done)
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
