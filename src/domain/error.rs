// Domain error types
use std::path::PathBuf;
use thiserror::Error;

/// The tabular source could not be turned into a dataset.
///
/// All variants are fatal at startup: a dashboard over a broken dataset
/// must not start serving at all.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record at line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("expected {expected} columns at line {line}, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// The latest reading was requested from a dataset with zero rows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dataset contains no rows")]
pub struct EmptyDatasetError;

/// A widget referenced a column outside the fixed schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown column {0:?}, expected one of: year, temperature, moisture, humidity")]
pub struct UnknownColumnError(pub String);

/// Failures surfaced while mapping dataset columns onto widgets.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    EmptyDataset(#[from] EmptyDatasetError),
    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumnError),
}
