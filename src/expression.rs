//! Filter and aggregate expression parsing.
//!
//! Two fixed grammars, both matched against the whole input string:
//!
//! - filter: `column<op>value`, where `column` is one or more of `[a-zA-Z0-9_ ]`, `<op>` is one
//!   of `<`, `>`, `=`, and `value` is one or more of `[a-zA-Z0-9._ ]`
//! - aggregate: `column=<op>`, where `<op>` is exactly `min`, `avg` or `max`
//!
//! Spaces are ordinary characters: `"unit price >10"` names the column `"unit price "`.
//! Column names are checked against a [`Header`] separately, via `resolve`.

use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::types::Header;

/// Which grammar an expression string is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// `--where` expressions.
    Filter,
    /// `--aggregate` expressions.
    Aggregate,
}

impl ExpressionKind {
    /// Human-readable description of the expected format.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Filter => {
                "--where expects the format \"column<op>value\"; supported operators are <, >, ="
            }
            Self::Aggregate => {
                "--aggregate expects the format \"column=value\"; value can be min, avg, max"
            }
        }
    }
}

/// Comparison operator of a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Eq,
}

impl CompareOp {
    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "=" => Some(Self::Eq),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Reduction applied by an aggregate expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    /// Smallest value.
    Min,
    /// Arithmetic mean, rounded to two decimals.
    Avg,
    /// Largest value.
    Max,
}

impl AggregateOp {
    /// Look up an operation by its (lowercase) keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "min" => Some(Self::Min),
            "avg" => Some(Self::Avg),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Avg => "avg",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed `column<op>value` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub column: String,
    pub op: CompareOp,
    /// Literal right-hand side, kept as text.
    pub value: String,
}

impl FilterExpr {
    /// Parse a filter expression.
    ///
    /// Fails with [`QueryError::ExpressionFormat`] if `raw` does not match the filter grammar.
    pub fn parse(raw: &str) -> QueryResult<Self> {
        let (column, symbol, value) =
            split_filter(raw).ok_or_else(|| format_error(ExpressionKind::Filter, raw))?;
        let op = CompareOp::from_symbol(symbol).ok_or_else(|| QueryError::UnsupportedOperator {
            operator: symbol.to_owned(),
        })?;
        Ok(Self {
            column: column.to_owned(),
            op,
            value: value.to_owned(),
        })
    }

    /// Index of the filtered column in `header`.
    pub fn resolve(&self, header: &Header) -> QueryResult<usize> {
        resolve_column(header, &self.column)
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.value)
    }
}

/// A parsed `column=op` aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateExpr {
    pub column: String,
    pub op: AggregateOp,
}

impl AggregateExpr {
    /// Parse an aggregate expression.
    ///
    /// Fails with [`QueryError::ExpressionFormat`] if `raw` does not match the aggregate grammar.
    pub fn parse(raw: &str) -> QueryResult<Self> {
        let (column, keyword) =
            split_aggregate(raw).ok_or_else(|| format_error(ExpressionKind::Aggregate, raw))?;
        let op = AggregateOp::from_keyword(keyword).ok_or_else(|| {
            QueryError::UnsupportedOperation {
                operation: keyword.to_owned(),
            }
        })?;
        Ok(Self {
            column: column.to_owned(),
            op,
        })
    }

    /// Index of the aggregated column in `header`.
    pub fn resolve(&self, header: &Header) -> QueryResult<usize> {
        resolve_column(header, &self.column)
    }
}

impl fmt::Display for AggregateExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.op)
    }
}

/// Either kind of parsed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Filter(FilterExpr),
    Aggregate(AggregateExpr),
}

impl Expression {
    /// Parse `raw` with the grammar selected by `kind`.
    pub fn parse(raw: &str, kind: ExpressionKind) -> QueryResult<Self> {
        match kind {
            ExpressionKind::Filter => FilterExpr::parse(raw).map(Self::Filter),
            ExpressionKind::Aggregate => AggregateExpr::parse(raw).map(Self::Aggregate),
        }
    }
}

fn is_column_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ' '
}

fn is_value_char(c: char) -> bool {
    is_column_char(c) || c == '.'
}

// The column class excludes every operator symbol, so the first non-column character is the
// only possible operator position.
fn split_filter(raw: &str) -> Option<(&str, &str, &str)> {
    let raw = strip_final_newline(raw);
    let op_at = raw.find(|c: char| !is_column_char(c))?;
    let (column, rest) = raw.split_at(op_at);
    let symbol = rest.get(..1)?;
    if !matches!(symbol, "<" | ">" | "=") {
        return None;
    }
    let value = &rest[1..];
    if column.is_empty() || value.is_empty() || !value.chars().all(is_value_char) {
        return None;
    }
    Some((column, symbol, value))
}

fn split_aggregate(raw: &str) -> Option<(&str, &str)> {
    let raw = strip_final_newline(raw);
    let (column, keyword) = raw.split_once('=')?;
    if column.is_empty() || !column.chars().all(is_column_char) {
        return None;
    }
    if !matches!(keyword, "min" | "avg" | "max") {
        return None;
    }
    Some((column, keyword))
}

// A single trailing newline is tolerated, as with an end-of-line anchored match.
fn strip_final_newline(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}

fn resolve_column(header: &Header, column: &str) -> QueryResult<usize> {
    header
        .index_of(column)
        .ok_or_else(|| QueryError::ColumnNotFound {
            column: column.to_owned(),
        })
}

fn format_error(kind: ExpressionKind, raw: &str) -> QueryError {
    QueryError::ExpressionFormat {
        kind,
        expression: raw.to_owned(),
    }
}
