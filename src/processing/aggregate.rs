//! Single-column aggregation for [`crate::types::DataSet`].

use std::fmt;

use log::debug;

use crate::error::{QueryError, QueryResult};
use crate::expression::{AggregateExpr, AggregateOp};
use crate::types::{parse_number, DataSet};

/// Cell text produced when there are no rows to aggregate.
pub const NO_DATA: &str = "No data";

/// Outcome of an aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateValue {
    /// The reduced value.
    Number(f64),
    /// The input had no rows.
    NoData,
}

impl fmt::Display for AggregateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&format_float(*v)),
            Self::NoData => f.write_str(NO_DATA),
        }
    }
}

/// Reduce the column named by `expr` to a single value.
///
/// - Fails with [`QueryError::ColumnNotFound`] if the column is not in the header.
/// - Fails with [`QueryError::NonNumericAggregation`] if any value in the column does not parse
///   as a number; nothing is skipped.
/// - Returns [`AggregateValue::NoData`] if `dataset` has no rows.
pub fn aggregate_column(dataset: &DataSet, expr: &AggregateExpr) -> QueryResult<AggregateValue> {
    let idx = expr.resolve(&dataset.header)?;

    let values = dataset
        .column_values(idx)
        .map(|raw| {
            parse_number(raw).ok_or_else(|| QueryError::NonNumericAggregation {
                column: expr.column.clone(),
                raw: raw.to_owned(),
            })
        })
        .collect::<QueryResult<Vec<f64>>>()?;

    let Some(&first) = values.first() else {
        return Ok(AggregateValue::NoData);
    };

    let result = match expr.op {
        AggregateOp::Min => values[1..]
            .iter()
            .fold(first, |acc, &v| if v < acc { v } else { acc }),
        AggregateOp::Max => values[1..]
            .iter()
            .fold(first, |acc, &v| if v > acc { v } else { acc }),
        AggregateOp::Avg => {
            let sum: f64 = values.iter().sum();
            round_half_even(sum / values.len() as f64)
        }
    };
    debug!("aggregate {expr} over {} rows = {result}", values.len());
    Ok(AggregateValue::Number(result))
}

/// Reduce the column named by `expr` and return the result as a one-row, one-cell dataset.
///
/// The header of `dataset` is carried over unchanged.
pub fn aggregate(dataset: &DataSet, expr: &AggregateExpr) -> QueryResult<DataSet> {
    let value = aggregate_column(dataset, expr)?;
    Ok(DataSet::new(
        dataset.header.clone(),
        vec![vec![value.to_string()]],
    ))
}

/// Round `x` to two decimal places.
///
/// The exact binary value of `x` is rounded, so `2.675` (stored as `2.67499…`) becomes `2.67`.
/// Exact ties go to the even neighbour: `0.125` becomes `0.12`, `0.375` becomes `0.38`.
pub fn round_half_even(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let bits = x.abs().to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased_exp == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exp - 1075)
    };
    if exp >= 0 {
        // Already an integer.
        return x;
    }

    // |x| * 100 == scaled / 2^shift exactly.
    let scaled = u128::from(mantissa) * 100;
    let shift = exp.unsigned_abs();
    let cents = if shift >= 128 {
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if remainder > half || (remainder == half && quotient & 1 == 1) {
            quotient + 1
        } else {
            quotient
        }
    };

    let magnitude = format!("{}.{:02}", cents / 100, cents % 100)
        .parse::<f64>()
        .unwrap_or(x.abs());
    magnitude.copysign(x)
}

/// Format a float as its shortest round-trip text, always with a fractional part or exponent.
///
/// `149.0`, `4.23`, `1e+16`, `1e-05`, `inf`, `nan`.
///
/// Digits come from Rust's shortest round-trip formatting. When two shortest candidates are
/// equally close (e.g. `687632722480660.2`), the last digit can differ from other languages'
/// shortest-repr output; the value still parses back to the same `f64`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{v:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
