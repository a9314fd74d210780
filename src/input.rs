//! Locating documents on disk and holding them as mutable line sequences.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a single line was terminated.
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Final line without a terminator.
    None,
}

impl LineEnding {
    #[must_use]
    /// The terminator text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A text document split into lines, remembering how to join it back together.
pub struct Document {
    /// Line contents without terminators.
    pub lines: Vec<String>,
    /// Terminator of each line, parallel to `lines`.
    pub endings: Vec<LineEnding>,
}

impl Document {
    #[must_use]
    /// Split `text` into lines, recording each line's own terminator.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();
        for piece in text.split_inclusive('\n') {
            let (line, ending) = if let Some(line) = piece.strip_suffix("\r\n") {
                (line, LineEnding::CrLf)
            } else if let Some(line) = piece.strip_suffix('\n') {
                (line, LineEnding::Lf)
            } else {
                (piece, LineEnding::None)
            };
            lines.push(line.to_string());
            endings.push(ending);
        }
        Self { lines, endings }
    }

    #[must_use]
    /// Join the lines back into text, each with the terminator it was read with.
    ///
    /// Lines appended beyond the recorded endings are terminated with `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            text.push_str(line);
            let ending = self.endings.get(index).copied().unwrap_or(LineEnding::Lf);
            text.push_str(ending.as_str());
        }
        text
    }

    /// Read and split the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Write the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Expand the given paths into the documents to renumber.
///
/// Files named directly are always included. Directories are walked recursively, skipping
/// hidden entries, and contribute files whose extension is in `extensions`. With no paths the
/// current directory is walked. The result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns [`Error::Read`] if a path does not exist or a directory cannot be listed.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        let metadata = fs::metadata(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        if metadata.is_dir() {
            walk(&path, extensions, &mut documents)?;
        } else {
            documents.push(path);
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn walk(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| Error::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.is_dir() {
            walk(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.trim_start_matches('.') == ext))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
