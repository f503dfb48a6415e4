//! Error types produced while scanning

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A directory in the tree could not be listed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read directory: {0}")]
    ReadDir(#[from] ignore::Error),
}

impl ScanError {
    /// The directory the failure refers to, when the walker recorded one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadDir(err) => walk_error_path(err),
        }
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// The size of a single file could not be queried.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl FileError {
    pub fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }
}
