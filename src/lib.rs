//! `csv-query` reads a CSV file into an in-memory [`types::DataSet`], optionally keeps the rows
//! matching one comparison, optionally reduces one numeric column, and renders the result as a
//! grid table.
//!
//! The primary entrypoint is [`pipeline::run`], driven by [`pipeline::QueryOptions`].
//!
//! ## Expressions
//!
//! - **Filter** (`--where`): `column<op>value` with `<`, `>` or `=`, e.g. `price>500`,
//!   `brand=apple`. `=` compares text exactly; `<`/`>` compare numbers when both sides parse as
//!   numbers and text otherwise, decided per row.
//! - **Aggregate** (`--aggregate`): `column=min`, `column=avg` or `column=max`. Every value in the
//!   column must be numeric. `avg` is rounded to two decimals, ties to even.
//!
//! Filtering always happens before aggregation.
//!
//! ## Quick example
//!
//! ```no_run
//! use csv_query::pipeline::{run, QueryOptions};
//!
//! # fn main() -> Result<(), csv_query::QueryError> {
//! let opts = QueryOptions {
//!     where_expr: Some("price>500".to_string()),
//!     aggregate_expr: Some("price=avg".to_string()),
//!     ..QueryOptions::new("phones.csv")
//! };
//! println!("{}", run(&opts)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading
//! - [`expression`]: filter/aggregate expression parsing
//! - [`processing`]: filter and aggregate over a dataset
//! - [`render`]: grid table output
//! - [`pipeline`]: one end-to-end run
//! - [`observability`]: progress/failure hooks
//! - [`types`]: dataset types
//! - [`error`]: the error type used across the crate

pub mod error;
pub mod expression;
pub mod ingestion;
pub mod observability;
pub mod pipeline;
pub mod processing;
pub mod render;
pub mod types;

pub use error::{QueryError, QueryResult};
