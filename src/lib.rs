//! Hollow - find the empty files hiding in a directory tree

pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{Reporter, ScanSummary};
pub use scan::{FileError, Finding, Scan, ScanConfig, ScanError, Scanner, scan};
