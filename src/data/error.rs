//! Error types for data operations
//!
//! Loading the dataset is the only fallible data operation; everything after
//! startup is a read-only projection over the loaded table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The file does not exist
    #[error("Dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The extension is not one of csv, tsv or json
    #[error("Unsupported dataset format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A required column is absent or has an unusable type
    #[error("Column '{column}' is missing or not {expected}")]
    Column {
        column: &'static str,
        expected: &'static str,
    },

    /// Polars error while reading or projecting the frame
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataLoadError>;
