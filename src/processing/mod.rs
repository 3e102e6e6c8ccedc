//! In-memory validation, reshaping and aggregation.
//!
//! Every function here is independent and keeps no state between calls. Only
//! [`coerce_column()`] mutates its input.
//!
//! - [`is_valid_number()`]: strict lexical number check for a single cell
//! - [`dimensions()`]: classify a [`crate::types::Structure`] as dataframe, dataset or invalid
//! - [`total()`], [`mean()`], [`median()`]: aggregates over a [`crate::types::Dataset`]
//! - [`coerce_column()`]: convert a column's numeric text to numbers, in place
//! - [`flatten()`]: single-column dataframe to dataset
//! - [`slice()`]: row-pattern filter plus column projection
//!
//! ## Example: coerce → slice → flatten → total
//!
//! ```rust
//! use dfr::processing::{coerce_column, flatten, slice, total, RowPattern};
//! use dfr::types::{Cell, DataFrame};
//!
//! let mut df = DataFrame::new(vec![
//!     vec![Cell::from("region"), Cell::from("sales")],
//!     vec![Cell::from("North"), Cell::from("1000")],
//!     vec![Cell::from("South"), Cell::from("1500")],
//!     vec![Cell::from("North"), Cell::from("250.5")],
//! ])
//! .unwrap();
//!
//! assert_eq!(coerce_column(&mut df, 1).unwrap(), 3);
//!
//! let north = slice(&df, 0, &RowPattern::from("North"), &[1]).unwrap();
//! let sales = flatten(&north).unwrap();
//! assert_eq!(total(&sales).unwrap(), 1250.5);
//! ```

pub mod coerce;
pub mod flatten;
pub mod reduce;
pub mod shape;
pub mod slice;
pub mod validate;

pub use coerce::coerce_column;
pub use flatten::{flatten, flatten_structure};
pub use reduce::{mean, median, reduce, reduce_structure, total, ReduceOp};
pub use shape::dimensions;
pub use slice::{slice, RowPattern};
pub use validate::{is_valid_number, is_valid_number_str};
