//! Editor Errors
//!
//! Error taxonomy for document operations and menu input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by document operations and menu input.
///
/// None of these end the session: each is reported where it occurs and the
/// menu loop continues.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Save was requested with nothing to write
    #[error("document is empty, nothing to save")]
    EmptyDocument,

    /// Clear was requested on an empty document
    #[error("document is already empty")]
    AlreadyEmpty,

    /// A file could not be opened, read, or written
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Menu input was out of range or non-numeric
    #[error("invalid choice '{0}', expected a number between 1 and 6")]
    InvalidChoice(String),
}
