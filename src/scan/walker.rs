//! Scanner - walks a directory tree and reports empty files lazily

use std::fs;
use std::path::{Path, PathBuf};

use ignore::{DirEntry, Walk, WalkBuilder};
use tracing::{debug, warn};

use super::config::ScanConfig;
use super::error::{FileError, ScanError};

/// Something worth telling the operator about, produced by a `Scan`.
#[derive(Debug)]
pub enum Finding {
    /// A regular file whose size is exactly zero bytes.
    EmptyFile(PathBuf),
    /// The size of a file could not be queried.
    FileError(FileError),
    /// A directory could not be listed; its contents were skipped.
    DirError(ScanError),
}

/// Walks directory trees looking for empty files.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Start a scan of `root`. Nothing touches the filesystem until the
    /// returned iterator is advanced.
    pub fn scan(&self, root: &Path) -> Scan {
        debug!(root = %root.display(), recurse = self.config.recurse, "starting scan");

        // Every entry is inspected: no hidden-file or ignore-file filtering,
        // and symlinks are never followed into.
        let walk = WalkBuilder::new(root)
            .max_depth(self.config.max_depth())
            .follow_links(false)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .build();

        Scan { walk }
    }
}

/// Scan `root` for empty files, descending into subdirectories if `recurse`.
pub fn scan(root: &Path, recurse: bool) -> Scan {
    Scanner::new(ScanConfig::new(recurse)).scan(root)
}

/// A lazy, single-pass stream of findings from one directory tree.
pub struct Scan {
    walk: Walk,
}

impl std::fmt::Debug for Scan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scan").finish_non_exhaustive()
    }
}

impl Iterator for Scan {
    type Item = Finding;

    fn next(&mut self) -> Option<Finding> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Finding::DirError(ScanError::from(err))),
            };

            if let Some(finding) = inspect_entry(entry) {
                return Some(finding);
            }
        }
    }
}

/// Decide whether a single walked entry is an empty file.
fn inspect_entry(entry: DirEntry) -> Option<Finding> {
    if entry.depth() == 0 {
        if !entry.path().is_dir() {
            warn!(path = %entry.path().display(), "scan root is not a directory, nothing to scan");
        }
        return None;
    }

    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return None;
    }
    // A link to a directory counts as a directory: never reported, never entered.
    if file_type.is_symlink() && entry.path().is_dir() {
        return None;
    }

    let path = entry.into_path();
    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() && meta.len() == 0 => Some(Finding::EmptyFile(path)),
        Ok(_) => None,
        Err(source) => Some(Finding::FileError(FileError::new(path, source))),
    }
}
