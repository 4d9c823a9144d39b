//! In-memory query operations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//! Every operation is a pure transformation: the input dataset is never modified.
//!
//! - [`filter()`]: keep rows matching a [`crate::expression::FilterExpr`]
//! - [`aggregate()`]: reduce one column with a [`crate::expression::AggregateExpr`]
//!
//! ## Example: filter → aggregate
//!
//! ```rust
//! use csv_query::expression::{AggregateExpr, FilterExpr};
//! use csv_query::processing::{aggregate, filter};
//! use csv_query::types::{DataSet, Header};
//!
//! let ds = DataSet::new(
//!     Header::new(["name", "price"]),
//!     vec![
//!         vec!["redmi".to_string(), "199".to_string()],
//!         vec!["iphone".to_string(), "999".to_string()],
//!         vec!["pixel".to_string(), "599".to_string()],
//!     ],
//! );
//!
//! let expensive = filter(&ds, &FilterExpr::parse("price>500").unwrap()).unwrap();
//! assert_eq!(expensive.row_count(), 2);
//!
//! let avg = aggregate(&expensive, &AggregateExpr::parse("price=avg").unwrap()).unwrap();
//! assert_eq!(avg.rows, vec![vec!["799.0".to_string()]]);
//! ```

pub mod aggregate;
pub mod filter;

pub use aggregate::{aggregate, aggregate_column, format_float, round_half_even, AggregateValue, NO_DATA};
pub use filter::{compare, filter};
