//! Row filtering for [`crate::types::DataSet`].

use log::debug;

use crate::error::QueryResult;
use crate::expression::{CompareOp, FilterExpr};
use crate::types::{field, parse_number, DataSet};

/// Returns a new [`DataSet`] containing only rows that satisfy `expr`, in their original order.
///
/// Fails with [`crate::QueryError::ColumnNotFound`] if the column is not in the header. An
/// empty result is not an error.
pub fn filter(dataset: &DataSet, expr: &FilterExpr) -> QueryResult<DataSet> {
    let idx = expr.resolve(&dataset.header)?;
    let literal = parse_number(&expr.value);

    let out = dataset.filter_rows(|row| compare_with(field(row, idx), expr.op, &expr.value, literal));
    debug!("filter {expr}: {} -> {} rows", dataset.row_count(), out.row_count());
    Ok(out)
}

/// Evaluate `field <op> value`.
///
/// `=` is always an exact string comparison. `<` and `>` compare as numbers when both sides
/// parse as `f64`, otherwise as strings; the choice is made for each field on its own.
pub fn compare(field: &str, op: CompareOp, value: &str) -> bool {
    compare_with(field, op, value, parse_number(value))
}

fn compare_with(field: &str, op: CompareOp, value: &str, literal: Option<f64>) -> bool {
    let numeric = literal.and_then(|b| parse_number(field).map(|a| (a, b)));
    match op {
        CompareOp::Eq => field == value,
        CompareOp::Lt => match numeric {
            Some((a, b)) => a < b,
            None => field < value,
        },
        CompareOp::Gt => match numeric {
            Some((a, b)) => a > b,
            None => field > value,
        },
    }
}
