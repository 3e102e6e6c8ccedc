//! Numeric aggregation over a [`Dataset`].
//!
//! Cells that fail [`is_valid_number`](super::validate::is_valid_number) are skipped silently.
//! They only show up implicitly, e.g. as a smaller denominator for [`mean`].

use crate::error::{DfrError, DfrResult};
use crate::types::{Dataset, Structure};

/// Built-in aggregate operations over a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of valid values (0 when there are none).
    Total,
    /// Arithmetic mean of valid values.
    Mean,
    /// Median of valid values.
    Median,
}

/// Aggregate a dataset using a built-in [`ReduceOp`].
pub fn reduce(dataset: &Dataset, op: ReduceOp) -> DfrResult<f64> {
    match op {
        ReduceOp::Total => total(dataset),
        ReduceOp::Mean => mean(dataset),
        ReduceOp::Median => median(dataset),
    }
}

/// Aggregate a loosely-shaped structure.
///
/// Returns [`DfrError::InvalidShape`] unless the structure is a non-empty flat sequence.
pub fn reduce_structure(structure: &Structure, op: ReduceOp) -> DfrResult<f64> {
    let dataset = Dataset::try_from(structure)?;
    reduce(&dataset, op)
}

/// Sum of every valid numeric cell.
///
/// An empty or all-invalid dataset sums to `0.0`; this is not a failure.
pub fn total(dataset: &Dataset) -> DfrResult<f64> {
    Ok(numeric_values(dataset).sum())
}

/// Mean of the valid numeric cells.
///
/// Returns [`DfrError::NoNumericValues`] when no cell is valid (including an empty dataset).
pub fn mean(dataset: &Dataset) -> DfrResult<f64> {
    let (sum, count) = numeric_values(dataset).fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(DfrError::NoNumericValues);
    }
    Ok(sum / count as f64)
}

/// Median of the valid numeric cells.
///
/// Odd counts return the central value; even counts return the mean of the two central values.
/// Returns [`DfrError::NoNumericValues`] when no cell is valid.
pub fn median(dataset: &Dataset) -> DfrResult<f64> {
    let mut values: Vec<f64> = numeric_values(dataset).collect();
    if values.is_empty() {
        return Err(DfrError::NoNumericValues);
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    if n % 2 == 0 {
        Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Ok(values[n / 2])
    }
}

fn numeric_values(dataset: &Dataset) -> impl Iterator<Item = f64> + '_ {
    dataset.iter().filter_map(|cell| cell.numeric_value())
}
