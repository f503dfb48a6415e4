//! Plain-text reporting of scan findings
//!
//! Empty files and per-file errors go to the writer (stdout in the CLI), one
//! line each. Directory listing failures are logged as warnings instead.

use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use crate::scan::{FileError, Finding, ScanError};

/// Counts of what a `Reporter` has seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub empty_files: usize,
    pub file_errors: usize,
    pub dir_errors: usize,
}

impl ScanSummary {
    /// True if any file or directory could not be examined.
    pub fn had_errors(&self) -> bool {
        self.file_errors > 0 || self.dir_errors > 0
    }
}

/// Writes findings as human-readable lines.
pub struct Reporter<W: Write> {
    out: W,
    summary: ScanSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            summary: ScanSummary::default(),
        }
    }

    /// Report a single finding.
    pub fn report(&mut self, finding: &Finding) -> io::Result<()> {
        match finding {
            Finding::EmptyFile(path) => {
                self.summary.empty_files += 1;
                write_empty_file(&mut self.out, path)
            }
            Finding::FileError(err) => {
                self.summary.file_errors += 1;
                write_file_error(&mut self.out, err)
            }
            Finding::DirError(err) => {
                self.summary.dir_errors += 1;
                log_dir_error(err);
                Ok(())
            }
        }
    }

    /// Drain `findings`, reporting each one as it arrives.
    pub fn report_all<I>(&mut self, findings: I) -> io::Result<ScanSummary>
    where
        I: IntoIterator<Item = Finding>,
    {
        for finding in findings {
            self.report(&finding)?;
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_empty_file(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "Empty file found: {}", path.display())
}

fn write_file_error(out: &mut impl Write, err: &FileError) -> io::Result<()> {
    writeln!(
        out,
        "An error occurred processing file {}: {}",
        err.path.display(),
        err.source
    )
}

fn log_dir_error(err: &ScanError) {
    match err.path() {
        Some(path) => warn!(path = %path.display(), error = %err, "skipping unreadable directory"),
        None => warn!(error = %err, "skipping unreadable directory"),
    }
}
