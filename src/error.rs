use thiserror::Error;

/// Convenience result type used across the crate.
pub type StatsResult<T> = Result<T, StatsError>;

/// Error type shared by loading, aggregation, and reporting.
///
/// Any failure aborts the run; there is no retry or partial-report path.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Underlying I/O error (e.g. file not found, unwritable output).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error (malformed file, bad record, etc.).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A column required by an aggregation is not present in the header row.
    #[error("missing required column '{column}'. headers={headers:?}")]
    MissingColumn {
        column: String,
        headers: Vec<String>,
    },

    /// A non-missing value in a numeric column failed to parse as a number.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A statistic needed at least one valid value in a column and found none.
    ///
    /// The global flipper average is undefined over zero values; the run must
    /// fail here rather than propagate NaN into the report.
    #[error("no valid values in column '{column}'; cannot compute a mean over an empty set")]
    NoValidValues { column: String },
}
