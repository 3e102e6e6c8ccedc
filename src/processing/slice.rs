//! Row-pattern filtering and column projection for [`DataFrame`]s.

use crate::error::{DfrError, DfrResult};
use crate::types::{Cell, DataFrame};

/// Which rows a slice keeps.
#[derive(Debug, Clone, PartialEq)]
pub enum RowPattern {
    /// Keep every row.
    Any,
    /// Keep rows whose cell in the match column equals this cell exactly.
    ///
    /// There is no coercion: text `"1000"` does not equal the number `1000`.
    Equals(Cell),
}

impl RowPattern {
    /// The literal that stands for [`RowPattern::Any`] when parsed from text.
    pub const WILDCARD: &'static str = "*";

    pub(crate) fn matches(&self, row: &[Cell], col: usize) -> bool {
        match self {
            Self::Any => true,
            Self::Equals(expected) => row.get(col) == Some(expected),
        }
    }
}

impl From<&str> for RowPattern {
    /// `"*"` becomes [`RowPattern::Any`]; any other text is matched exactly.
    fn from(value: &str) -> Self {
        if value == Self::WILDCARD {
            Self::Any
        } else {
            Self::Equals(Cell::from(value))
        }
    }
}

impl From<Cell> for RowPattern {
    fn from(cell: Cell) -> Self {
        Self::Equals(cell)
    }
}

/// Returns a new [`DataFrame`] of the rows matching `pattern` in column `col`, projected onto
/// `export_cols`.
///
/// - An empty `export_cols` keeps every column.
/// - Otherwise the output has exactly the listed columns, in the listed order.
/// - Row order is preserved. Header rows get no special treatment.
///
/// `col` is only checked when the pattern is [`RowPattern::Equals`]; every index in
/// `export_cols` is checked. Out-of-range indices return [`DfrError::IndexOutOfRange`].
///
/// ```rust
/// use dfr::processing::{slice, RowPattern};
/// use dfr::types::{Cell, DataFrame};
///
/// let df = DataFrame::new(vec![
///     vec![Cell::from("tcp"), Cell::from(1), Cell::from(2), Cell::from(3)],
///     vec![Cell::from("icmp"), Cell::from(4), Cell::from(5), Cell::from(6)],
///     vec![Cell::from("tcp"), Cell::from(7), Cell::from(8), Cell::from(9)],
/// ])
/// .unwrap();
///
/// let out = slice(&df, 0, &RowPattern::from("tcp"), &[0, 2]).unwrap();
/// assert_eq!(
///     out.rows(),
///     &[
///         vec![Cell::from("tcp"), Cell::from(2)],
///         vec![Cell::from("tcp"), Cell::from(8)],
///     ]
/// );
/// ```
pub fn slice(
    dataframe: &DataFrame,
    col: usize,
    pattern: &RowPattern,
    export_cols: &[usize],
) -> DfrResult<DataFrame> {
    check_slice_args(dataframe, col, pattern, export_cols)?;

    if matches!(pattern, RowPattern::Any) && export_cols.is_empty() {
        return Ok(dataframe.clone());
    }

    let rows = dataframe
        .rows()
        .iter()
        .filter(|row| pattern.matches(row, col))
        .map(|row| project_row(row, export_cols))
        .collect();
    Ok(DataFrame::from_parts(
        rows,
        output_width(dataframe, export_cols),
    ))
}

pub(crate) fn check_slice_args(
    dataframe: &DataFrame,
    col: usize,
    pattern: &RowPattern,
    export_cols: &[usize],
) -> DfrResult<()> {
    let width = dataframe.col_count();
    let match_col = matches!(pattern, RowPattern::Equals(_)).then_some(col);
    match match_col
        .into_iter()
        .chain(export_cols.iter().copied())
        .find(|&idx| idx >= width)
    {
        Some(index) => Err(DfrError::IndexOutOfRange { index, width }),
        None => Ok(()),
    }
}

/// Copy of `row` restricted to `cols` in the given order; all cells when `cols` is empty.
///
/// Indices must already be in range.
pub(crate) fn project_row(row: &[Cell], cols: &[usize]) -> Vec<Cell> {
    if cols.is_empty() {
        row.to_vec()
    } else {
        cols.iter().map(|&c| row[c].clone()).collect()
    }
}

pub(crate) fn output_width(dataframe: &DataFrame, export_cols: &[usize]) -> usize {
    if export_cols.is_empty() {
        dataframe.col_count()
    } else {
        export_cols.len()
    }
}
