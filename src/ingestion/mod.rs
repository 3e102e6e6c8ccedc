//! Loading entrypoints and implementations.
//!
//! Most callers should use [`load_csv`] or [`load_table`] (from [`loader`]) which:
//!
//! - refuse paths that are not existing files ([`file_exists`])
//! - tokenize delimited text into rows of text cells (see [`csv`])
//! - drop excluded rows, then excluded columns
//! - return the filtered frame together with the source's original dimensions
//! - optionally report success/failure/alerts to a [`LoadObserver`]
//!
//! Loosely-shaped JSON input can be read with [`json`].

pub mod csv;
pub mod json;
pub mod loader;
pub mod observability;

pub use loader::{
    file_exists, load_csv, load_table, load_table_from_reader, LoadOptions, LoadedTable, TableFormat,
};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver,
};
