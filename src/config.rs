//! Scan configuration

/// Options for a single scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Display name for the build graph; defaults to the root directory's
    /// own base name when unset
    pub root_name: Option<String>,

    /// Sort each directory's entries lexicographically by name before
    /// processing. Raw filesystem listing order is not stable across
    /// platforms; sorting makes directive order reproducible. Precedence
    /// between markers never depends on this.
    pub sort_entries: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_name: None,
            sort_entries: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert!(config.root_name.is_none());
        assert!(config.sort_entries);
    }
}
