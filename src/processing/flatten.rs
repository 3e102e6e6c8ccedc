//! Single-column dataframe to dataset conversion.

use crate::error::{DfrError, DfrResult};
use crate::types::{DataFrame, Dataset, Dimensions, Structure};

/// Extract each row's only cell into a [`Dataset`], preserving row order.
///
/// Valid only for a frame with at least one row and exactly one column; any other shape returns
/// [`DfrError::InvalidShape`].
pub fn flatten(dataframe: &DataFrame) -> DfrResult<Dataset> {
    match dataframe.dimensions() {
        Dimensions::DataFrame { rows, cols: 1 } if rows >= 1 => {
            Ok(dataframe.rows().iter().map(|row| row[0].clone()).collect())
        }
        found => Err(DfrError::InvalidShape {
            expected: "single-column dataframe",
            found,
        }),
    }
}

/// [`flatten`] for loosely-shaped input. An already-flat dataset is rejected.
pub fn flatten_structure(structure: &Structure) -> DfrResult<Dataset> {
    match DataFrame::try_from(structure) {
        Ok(frame) => flatten(&frame),
        Err(_) => Err(DfrError::InvalidShape {
            expected: "single-column dataframe",
            found: structure.dimensions(),
        }),
    }
}
