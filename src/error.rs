use std::path::PathBuf;

use thiserror::Error;

use crate::types::Dimensions;

/// Convenience result type used across the crate.
pub type DfrResult<T> = Result<T, DfrError>;

/// Error type returned by loading, shape conversion, slicing and aggregation.
///
/// Individual invalid cells are never reported here: they are skipped by the aggregator and
/// left untouched by the coercer. Errors describe whole-call failures only.
#[derive(Debug, Error)]
pub enum DfrError {
    /// Underlying I/O error (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text tokenization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON structure could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input path does not exist (or is not a regular file).
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input holds no rows at all.
    #[error("empty input: {message}")]
    EmptyInput { message: String },

    /// A row's width differs from the first row's width.
    #[error("jagged row {row}: expected {expected} columns, found {found}")]
    JaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The structure does not have the shape the operation requires.
    #[error("invalid shape: expected {expected}, found dimensions {found}")]
    InvalidShape {
        expected: &'static str,
        found: Dimensions,
    },

    /// A column index is outside `0..width`.
    #[error("column index {index} out of range for width {width}")]
    IndexOutOfRange { index: usize, width: usize },

    /// An aggregate needs at least one valid numeric cell.
    #[error("no valid numeric values to aggregate")]
    NoNumericValues,

    /// Execution options are out of range (zero chunk size, zero threads, ...).
    #[error("invalid execution options: {message}")]
    InvalidOptions { message: String },

    /// The worker thread pool could not be started.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl DfrError {
    /// Dimensions to report alongside this failure.
    ///
    /// Load failures (missing file, empty input, jagged rows) describe a source that never became
    /// a table, so they report [`Dimensions::Invalid`]. Shape errors report what was found.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::InvalidShape { found, .. } => *found,
            _ => Dimensions::Invalid,
        }
    }
}
