//! Grid text rendering of query results.
//!
//! Rows are laid out through `arrow`'s pretty printer: every column becomes a `Utf8` array and
//! the batch is formatted as a bordered grid.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::error::QueryResult;
use crate::types::{field, DataSet, Header, Row};

/// Render a header and rows as a grid table.
///
/// The table is as wide as the widest of the header and the rows. Missing cells render blank,
/// and columns beyond the header get a blank title. A header with no columns renders as an
/// empty string; a header with no rows renders the header alone.
pub fn render_table(header: &Header, rows: &[Row]) -> QueryResult<String> {
    let width = rows.iter().map(Vec::len).fold(header.len(), usize::max);
    if width == 0 {
        return Ok(String::new());
    }

    let fields: Vec<Field> = (0..width)
        .map(|i| {
            let name = header.names.get(i).map(String::as_str).unwrap_or("");
            Field::new(name, DataType::Utf8, false)
        })
        .collect();
    let columns: Vec<ArrayRef> = (0..width)
        .map(|i| {
            let values = StringArray::from_iter_values(rows.iter().map(|row| field(row, i)));
            Arc::new(values) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

/// Render a whole [`DataSet`]; see [`render_table`].
pub fn render_dataset(dataset: &DataSet) -> QueryResult<String> {
    render_table(&dataset.header, &dataset.rows)
}
