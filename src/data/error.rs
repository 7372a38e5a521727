use thiserror::Error;

/// Error returned when a movie table cannot be loaded.
///
/// Only structural problems end up here. Field-level oddities in
/// `Released_Year` and `Gross` are absorbed by the loader, and rows with
/// missing values are dropped rather than reported.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Underlying I/O error (file not found, permission denied, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader could not make sense of the input.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks one or more required columns.
    #[error("missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A record does not line up with the header.
    #[error("malformed record at row {row}: {message}")]
    Malformed { row: usize, message: String },

    /// A numeric column holds a value that is not a usable number.
    #[error("invalid value at row {row} column '{column}': {message} (raw='{raw}')")]
    InvalidField {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// A decade label such as `"1990s"` could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decade label '{0}': expected something like \"1990s\"")]
pub struct ParseDecadeError(pub String);
