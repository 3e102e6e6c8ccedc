//! Shape inspection for loosely-shaped [`Structure`] values.

use crate::error::{DfrError, DfrResult};
use crate::types::{Cell, DataFrame, Dataset, Dimensions, Structure};

/// Classify a structure as a dataframe, a dataset or neither.
///
/// - A sequence of scalars is a dataset: `Dataset { len }`.
/// - A sequence of equal-length sequences of scalars is a dataframe:
///   `DataFrame { rows, cols }` where `cols` is the first row's width.
/// - Everything else is [`Dimensions::Invalid`]: undefined, a bare scalar, an empty sequence,
///   jagged rows, mixed rows and scalars, or nesting deeper than two levels.
///
/// Only shape is inspected; cell values are not validated.
pub fn dimensions(structure: &Structure) -> Dimensions {
    let Structure::Sequence(items) = structure else {
        return Dimensions::Invalid;
    };
    let Some(first) = items.first() else {
        return Dimensions::Invalid;
    };

    match first {
        Structure::Scalar(_) => {
            if items.iter().all(|s| matches!(s, Structure::Scalar(_))) {
                Dimensions::Dataset { len: items.len() }
            } else {
                Dimensions::Invalid
            }
        }
        Structure::Sequence(first_row) => {
            let cols = first_row.len();
            let rectangular = items.iter().all(|s| match s {
                Structure::Sequence(row) => {
                    row.len() == cols && row.iter().all(|c| matches!(c, Structure::Scalar(_)))
                }
                _ => false,
            });
            if rectangular {
                Dimensions::DataFrame {
                    rows: items.len(),
                    cols,
                }
            } else {
                Dimensions::Invalid
            }
        }
        Structure::Undefined => Dimensions::Invalid,
    }
}

impl Structure {
    /// See [`dimensions`].
    pub fn dimensions(&self) -> Dimensions {
        dimensions(self)
    }
}

fn scalars(items: &[Structure]) -> Vec<Cell> {
    items
        .iter()
        .filter_map(|s| match s {
            Structure::Scalar(c) => Some(c.clone()),
            _ => None,
        })
        .collect()
}

impl TryFrom<&Structure> for Dataset {
    type Error = DfrError;

    fn try_from(structure: &Structure) -> DfrResult<Self> {
        match (dimensions(structure), structure) {
            (Dimensions::Dataset { .. }, Structure::Sequence(items)) => {
                Ok(Dataset::new(scalars(items)))
            }
            (found, _) => Err(DfrError::InvalidShape {
                expected: "dataset",
                found,
            }),
        }
    }
}

impl TryFrom<&Structure> for DataFrame {
    type Error = DfrError;

    fn try_from(structure: &Structure) -> DfrResult<Self> {
        match (dimensions(structure), structure) {
            (Dimensions::DataFrame { cols, .. }, Structure::Sequence(items)) => {
                let rows = items
                    .iter()
                    .map(|s| match s {
                        Structure::Sequence(row) => scalars(row),
                        _ => Vec::new(),
                    })
                    .collect();
                Ok(DataFrame::from_parts(rows, cols))
            }
            (found, _) => Err(DfrError::InvalidShape {
                expected: "dataframe",
                found,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dimensions;
    use crate::error::DfrError;
    use crate::types::{Cell, DataFrame, Dataset, Dimensions, Structure};

    fn sales() -> Structure {
        Structure::from(vec![
            vec![Cell::from("date"), Cell::from("region"), Cell::from("sales")],
            vec![Cell::from("2024-01"), Cell::from("North"), Cell::from(1000)],
            vec![Cell::from("2024-01"), Cell::from("South"), Cell::from(1500)],
        ])
    }

    #[test]
    fn two_dimensional_sequence_is_dataframe() {
        assert_eq!(
            dimensions(&sales()),
            Dimensions::DataFrame { rows: 3, cols: 3 }
        );
        assert_eq!(sales().dimensions().as_pair(), (3, 3));
    }

    #[test]
    fn flat_sequence_is_dataset() {
        let monthly = Structure::from(vec![Cell::from(1000), Cell::from(1500), Cell::from(2000)]);
        assert_eq!(dimensions(&monthly).as_pair(), (3, -1));
    }

    #[test]
    fn non_sequences_and_empty_input_are_invalid() {
        assert_eq!(dimensions(&Structure::Scalar(Cell::from(""))), Dimensions::Invalid);
        assert_eq!(dimensions(&Structure::Undefined), Dimensions::Invalid);
        assert_eq!(dimensions(&Structure::Sequence(vec![])), Dimensions::Invalid);
    }

    #[test]
    fn jagged_mixed_and_deep_sequences_are_invalid() {
        let jagged = Structure::from(vec![
            vec![Cell::from(1), Cell::from(2)],
            vec![Cell::from(3)],
        ]);
        assert_eq!(dimensions(&jagged), Dimensions::Invalid);

        let mixed = Structure::Sequence(vec![
            Structure::from(vec![Cell::from(1)]),
            Structure::Scalar(Cell::from(2)),
        ]);
        assert_eq!(dimensions(&mixed), Dimensions::Invalid);

        let deep = Structure::Sequence(vec![Structure::Sequence(vec![Structure::from(vec![
            Cell::from(1),
        ])])]);
        assert_eq!(dimensions(&deep), Dimensions::Invalid);
    }

    #[test]
    fn try_from_checks_shape() {
        let df = DataFrame::try_from(&sales()).unwrap();
        assert_eq!(df.row_count(), 3);
        assert_eq!(df.get(1, 1), Some(&Cell::from("North")));

        let err = Dataset::try_from(&sales()).unwrap_err();
        assert!(matches!(
            err,
            DfrError::InvalidShape {
                expected: "dataset",
                found: Dimensions::DataFrame { rows: 3, cols: 3 }
            }
        ));

        let flat = Structure::from(vec![Cell::from(1.5)]);
        assert_eq!(
            Dataset::try_from(&flat).unwrap(),
            Dataset::new(vec![Cell::from(1.5)])
        );
        assert!(DataFrame::try_from(&flat).is_err());
    }
}
