//! Catalog file persistence boundary.
//!
//! # Responsibility
//! - Load and save the whole catalog as a single JSON document.
//! - Keep file-format details out of repository/service orchestration.
//!
//! # Invariants
//! - A missing file loads as an empty catalog, not an error.
//! - Every save rewrites the file in full; there is no incremental path.

use crate::model::book::{Book, BookId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file;

pub use file::{load_catalog, save_catalog};

/// The in-memory catalog, mirrored to one on-disk JSON object.
pub type Catalog = HashMap<BookId, Book>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for catalog load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// File could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// File content is not a well-formed catalog document.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog file i/o failed at `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "catalog file `{}` is malformed: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}
