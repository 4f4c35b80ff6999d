//! Error types for alphabet dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a dataset from loading at all.
///
/// Inconsistent but loadable entries are reported as
/// [`DatasetIssue`](super::DatasetIssue)s instead.
#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse alphabet TOML")]
    Parse(#[from] toml::de::Error),

    #[error("failed to parse alphabet TOML in {path}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
