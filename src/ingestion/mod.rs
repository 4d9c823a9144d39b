//! Dataset loading.
//!
//! Most callers should use [`load_from_path`], which checks that the input exists and then
//! reads it as CSV into an in-memory [`crate::types::DataSet`]. Reader-based loading is
//! available under [`csv`].

pub mod csv;

pub use self::csv::{load_csv_from_path, load_csv_from_reader, CsvOptions};

use std::path::Path;

use crate::error::{QueryError, QueryResult};
use crate::types::DataSet;

/// Load a dataset from `path`.
///
/// Fails with [`QueryError::PathNotFound`] before opening anything if `path` does not exist.
pub fn load_from_path(path: impl AsRef<Path>, options: &CsvOptions) -> QueryResult<DataSet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(QueryError::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    load_csv_from_path(path, options)
}
