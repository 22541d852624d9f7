//! Tabular data access for the scatter plot helper

pub mod csv;
pub mod dataset;
pub mod kind;
pub mod stats;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use self::csv::{load_csv, CsvOptions};
pub use dataset::Dataset;
pub use kind::ColumnKind;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{column}' is {kind}, expected a numeric column")]
    NotNumeric { column: String, kind: ColumnKind },
}

pub type Result<T, E = DataError> = std::result::Result<T, E>;
