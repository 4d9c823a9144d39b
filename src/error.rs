use std::path::PathBuf;

use thiserror::Error;

use crate::expression::ExpressionKind;

/// Convenience result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned by loading, parsing, filtering, aggregating and rendering.
///
/// Every variant is fatal for a single invocation; the binary prints the message and exits
/// with [`QueryError::exit_code`].
#[derive(Debug, Error)]
pub enum QueryError {
    /// The input path does not exist.
    #[error("file {} not found", path.display())]
    PathNotFound { path: PathBuf },

    /// Underlying I/O error (e.g. permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A filter or aggregate expression does not match its grammar.
    #[error("invalid expression '{expression}': {}", kind.usage())]
    ExpressionFormat {
        kind: ExpressionKind,
        expression: String,
    },

    /// The expression names a column that is not in the header.
    #[error("column {column} not found")]
    ColumnNotFound { column: String },

    /// The filter operator is not one of `<`, `>`, `=`.
    #[error("operator {operator} is not supported")]
    UnsupportedOperator { operator: String },

    /// The aggregate operation is not one of `min`, `avg`, `max`.
    #[error("operation {operation} is not supported")]
    UnsupportedOperation { operation: String },

    /// The aggregate column holds at least one value that is not a number.
    #[error("aggregation is supported only for numbers: column '{column}' has value '{raw}'")]
    NonNumericAggregation { column: String, raw: String },

    /// The result could not be laid out as a table.
    #[error("render error: {0}")]
    Render(#[from] arrow::error::ArrowError),
}

impl QueryError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
