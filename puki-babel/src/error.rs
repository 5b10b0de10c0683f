//! Error types for reading wiki sources and writing site output.
//!
//! The markup conversion itself cannot fail; only the file-system facing
//! collaborators produce these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BabelError {
    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Walking the wiki directory failed
    #[error("Cannot walk wiki directory: {0}")]
    Walk(#[from] walkdir::Error),
    /// A page file name is not valid hex
    #[error("Invalid page file name '{name}': {source}")]
    InvalidPageName {
        name: String,
        #[source]
        source: hex::FromHexError,
    },
    /// A page file name decodes to bytes that are not UTF-8
    #[error("Page file name '{name}' does not decode to UTF-8")]
    NonUtf8PageName { name: String },
}

impl BabelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BabelError::Io {
            path: path.into(),
            source,
        }
    }
}
