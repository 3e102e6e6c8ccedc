//! Delimited-text tokenization.
//!
//! Every line becomes a row of [`Cell::Text`] values. There is no header handling (a header is
//! just the first row), and records of different lengths are accepted here so the loader can
//! report them as [`crate::DfrError::JaggedRow`].

use std::io::Read;
use std::path::Path;

use crate::error::DfrResult;
use crate::types::Cell;

/// A reader builder configured for raw, header-less, possibly jagged records.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).delimiter(delimiter);
    builder
}

/// Tokenize a delimited file into rows of text cells.
pub fn read_rows_from_path(path: impl AsRef<Path>, delimiter: u8) -> DfrResult<Vec<Vec<Cell>>> {
    let mut rdr = reader_builder(delimiter).from_path(path)?;
    read_rows_from_reader(&mut rdr)
}

/// Tokenize records from an existing CSV reader.
///
/// Cell text is kept as-is (no trimming).
pub fn read_rows_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> DfrResult<Vec<Vec<Cell>>> {
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(Cell::from).collect());
    }
    Ok(rows)
}
