//! `dfr` is a small tabular-data utility library: it loads rectangular data from delimited text
//! into an in-memory [`types::DataFrame`], validates and coerces cells into numbers, slices
//! dataframes by row pattern and column selection, and computes totals, means and medians over
//! flat [`types::Dataset`]s.
//!
//! The primary entrypoint for files is [`ingestion::load_csv`] (or [`ingestion::load_table`] for
//! other delimiters and observers). Everything in [`processing`] works on in-memory values.
//!
//! ## Cells
//!
//! A [`types::Cell`] is either text or a number. Cells loaded from files are always text until a
//! column is converted with [`processing::coerce_column`]. A cell counts as numeric only if its
//! text form matches a strict pattern: an optional leading `-`, digits, and optionally `.`
//! followed by digits (see [`processing::is_valid_number`]).
//!
//! ## Shapes
//!
//! Loosely-shaped input is a [`types::Structure`]; [`processing::dimensions`] classifies it as a
//! dataframe `(rows, cols)`, a dataset `(len, -1)` or neither `(-1, -1)`. Typed values are
//! obtained with `TryFrom`, which fails with [`DfrError::InvalidShape`].
//!
//! ## Failures
//!
//! Whole-call failures are [`DfrError`] variants: a missing file, a non-tabular shape, an
//! out-of-range column, or an aggregate with no valid values. Individual non-numeric cells are
//! never errors; aggregates skip them and coercion leaves them as text.
//!
//! ## Example: load → coerce → slice → flatten → total
//!
//! ```no_run
//! use dfr::ingestion::load_csv;
//! use dfr::processing::{coerce_column, flatten, slice, total, RowPattern};
//!
//! # fn main() -> Result<(), dfr::DfrError> {
//! // Skip the header row; keep every column.
//! let mut sales = load_csv("sales_data.csv", &[0], &[])?.frame;
//! coerce_column(&mut sales, 5)?;
//!
//! let north = slice(&sales, 1, &RowPattern::from("North"), &[5])?;
//! let north_total = total(&flatten(&north)?)?;
//! println!("north={north_total}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: file loading, delimited-text tokenization, JSON structures, load observers
//! - [`types`]: cells, datasets, dataframes, structures and dimensions
//! - [`processing`]: validation, shape inspection, aggregation, coercion, flattening, slicing
//! - [`execution`]: chunked parallel slicing/coercion with metrics
//! - [`error`]: the crate's error type

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{DfrError, DfrResult};
