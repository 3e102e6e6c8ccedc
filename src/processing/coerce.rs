//! In-place text-to-number coercion of a dataframe column.

use crate::error::{DfrError, DfrResult};
use crate::types::{Cell, DataFrame};

/// Convert every numeric-looking text cell in column `col` to [`Cell::Number`], in place.
///
/// Returns how many cells were converted. Cells that are already numbers are not counted, and
/// text that fails [`is_valid_number`](super::validate::is_valid_number) is left unchanged.
///
/// Returns [`DfrError::IndexOutOfRange`] (without touching the frame) if `col` is not a column.
pub fn coerce_column(dataframe: &mut DataFrame, col: usize) -> DfrResult<usize> {
    check_column(dataframe, col)?;
    Ok(dataframe
        .rows_mut()
        .iter_mut()
        .map(|row| coerce_cell(&mut row[col]))
        .filter(|&converted| converted)
        .count())
}

pub(crate) fn check_column(dataframe: &DataFrame, col: usize) -> DfrResult<()> {
    if col >= dataframe.col_count() {
        return Err(DfrError::IndexOutOfRange {
            index: col,
            width: dataframe.col_count(),
        });
    }
    Ok(())
}

/// Returns `true` if the cell was text and got converted.
pub(crate) fn coerce_cell(cell: &mut Cell) -> bool {
    let Cell::Text(_) = cell else {
        return false;
    };
    match cell.numeric_value() {
        Some(v) => {
            *cell = Cell::Number(v);
            true
        }
        None => false,
    }
}
