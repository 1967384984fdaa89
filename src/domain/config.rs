//! File configuration for share persistence

use std::path::PathBuf;

/// Default file both read from when combining and appended to when splitting
pub const DEFAULT_SHARES_FILE: &str = "shares.txt";

/// Where tagged shares are read from and written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFiles {
    /// Newline-delimited share file read when combining
    pub input: PathBuf,
    /// Share file appended to after splitting
    pub output: PathBuf,
}

impl ShareFiles {
    /// Builds the configuration, falling back to [`DEFAULT_SHARES_FILE`] for unset paths
    #[must_use]
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input: input.unwrap_or_else(|| PathBuf::from(DEFAULT_SHARES_FILE)),
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_SHARES_FILE)),
        }
    }
}

impl Default for ShareFiles {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_shares_txt() {
        let files = ShareFiles::default();
        assert_eq!(files.input, PathBuf::from("shares.txt"));
        assert_eq!(files.output, PathBuf::from("shares.txt"));
    }

    #[test]
    fn test_overrides_each_path_independently() {
        let files = ShareFiles::new(None, Some(PathBuf::from("out.txt")));
        assert_eq!(files.input, PathBuf::from("shares.txt"));
        assert_eq!(files.output, PathBuf::from("out.txt"));
    }
}
