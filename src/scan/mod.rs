//! Empty file scanning
//!
//! `Scanner` walks a directory tree and yields a lazy stream of `Finding`s:
//! empty regular files, files whose size could not be queried, and
//! directories that could not be listed.

mod config;
mod error;
mod walker;

pub use config::ScanConfig;
pub use error::{FileError, ScanError};
pub use walker::{Finding, Scan, Scanner, scan};
