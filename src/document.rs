//! Document Session
//!
//! The in-memory document: an ordered sequence of text lines with append,
//! render, save, load, and clear operations. Whether the document is "empty"
//! is always derived from the line count, never stored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::EditorError;

/// Outcome of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// The path actually written, after extension resolution
    pub path: PathBuf,
    /// Number of lines written
    pub lines_written: usize,
}

/// An ordered sequence of text lines held in memory for the session
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append lines from `input` until the first empty line or the end of
    /// the iterator. The empty line is a sentinel and is not stored.
    ///
    /// Returns the number of lines appended; zero is a valid outcome.
    pub fn append_lines<I>(&mut self, input: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut appended = 0;
        for line in input {
            if line.is_empty() {
                break;
            }
            self.lines.push(line);
            appended += 1;
        }
        debug!(
            "appended {appended} line(s), document now has {}",
            self.lines.len()
        );
        appended
    }

    /// A 1-based indexed view of the document for display, in document order.
    ///
    /// Returns `None` when the document is empty so the caller can show
    /// guidance instead of a blank listing. Read-only.
    pub fn render(&self) -> Option<impl Iterator<Item = (usize, &str)>> {
        if self.lines.is_empty() {
            return None;
        }
        Some(
            self.lines
                .iter()
                .enumerate()
                .map(|(index, line)| (index + 1, line.as_str())),
        )
    }

    /// Write the document to `path`, newline-separated with no trailing
    /// newline after the final line.
    ///
    /// Fails with [`EditorError::EmptyDocument`] before touching the
    /// filesystem when there is nothing to write. The target gets a `.txt`
    /// extension only when the given path contains no `.` at all (see
    /// [`resolve_save_path`]).
    pub fn save_to(&self, path: &str) -> Result<SaveReport, EditorError> {
        if self.lines.is_empty() {
            return Err(EditorError::EmptyDocument);
        }

        let resolved = resolve_save_path(path);
        let io_err = |source| EditorError::Io {
            path: resolved.clone(),
            source,
        };

        let file = File::create(&resolved).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                writer.write_all(b"\n").map_err(io_err)?;
            }
            writer.write_all(line.as_bytes()).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        info!(
            "saved {} line(s) to {}",
            self.lines.len(),
            resolved.display()
        );
        Ok(SaveReport {
            path: resolved,
            lines_written: self.lines.len(),
        })
    }

    /// Replace the document with the lines read from `path`.
    ///
    /// The file is read into a scratch buffer first and the document is
    /// replaced only once the whole file has been read; a failed or partial
    /// read leaves the current document untouched.
    ///
    /// Returns the number of lines loaded.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize, EditorError> {
        let path = path.as_ref();
        let io_err = |source| EditorError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let buffer: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<Result<_, _>>()
            .map_err(io_err)?;

        let count = buffer.len();
        self.lines = buffer;
        info!("loaded {count} line(s) from {}", path.display());
        Ok(count)
    }

    /// Remove all lines, returning how many were removed.
    ///
    /// Fails with [`EditorError::AlreadyEmpty`] (informational) when there
    /// is nothing to remove, leaving the document unchanged.
    pub fn clear(&mut self) -> Result<usize, EditorError> {
        if self.lines.is_empty() {
            return Err(EditorError::AlreadyEmpty);
        }
        let removed = self.lines.len();
        self.lines.clear();
        debug!("cleared {removed} line(s)");
        Ok(removed)
    }
}

/// Resolve a save target: append `.txt` only when the given path contains
/// no `.` anywhere in the entered string. A dot in any component, including
/// a directory name, suppresses the default extension.
fn resolve_save_path(path: &str) -> PathBuf {
    if path.contains('.') {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{path}.txt"))
    }
}
