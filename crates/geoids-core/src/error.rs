// crates/geoids-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoIdsError>;

/// Everything that can go wrong while producing the lookup file.
///
/// All variants are fatal: the pipeline does not retry or recover, it
/// surfaces the first failure and leaves whatever partial output was
/// already written on disk.
#[derive(Debug, Error)]
pub enum GeoIdsError {
    /// An input dataset is missing from the working directory.
    #[error("dataset not found at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tab-separated city file could not be read or tokenized.
    #[error("failed to read city dataset: {0}")]
    Csv(#[from] csv::Error),

    /// A city row carried fewer than the 3 columns we index into.
    #[error("malformed city row at line {line}: expected at least 3 columns, found {found}")]
    MalformedRow { line: u64, found: usize },

    /// The country file is not valid JSON or lacks the expected shape.
    #[error("failed to parse country dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing or flushing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
