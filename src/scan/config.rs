//! Configuration for the scanner

/// Configuration for scan traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Descend into subdirectories below the root.
    pub recurse: bool,
}

impl ScanConfig {
    pub fn new(recurse: bool) -> Self {
        Self { recurse }
    }

    /// Deepest entry depth the walk visits. The root is depth 0, so a
    /// non-recursive scan stops at its immediate children.
    pub fn max_depth(&self) -> Option<usize> {
        if self.recurse { None } else { Some(1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_does_not_recurse() {
        let config = ScanConfig::default();
        assert!(!config.recurse);
        assert_eq!(config.max_depth(), Some(1));
    }

    #[test]
    fn test_recurse_is_unbounded() {
        assert_eq!(ScanConfig::new(true).max_depth(), None);
    }
}
