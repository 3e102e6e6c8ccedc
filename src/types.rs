//! Core data model types.
//!
//! Cells are either text or numbers. A [`Dataset`] is a flat list of cells, a [`DataFrame`] is a
//! rectangular list of rows, and a [`Structure`] is loosely-shaped input whose shape is decided
//! by [`crate::processing::dimensions`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DfrError, DfrResult};
use crate::processing::validate::is_valid_number;

/// A single scalar table entry.
///
/// Cells loaded from delimited text are always [`Cell::Text`]; numbers appear once a column is
/// coerced or when cells are built directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// 64-bit float.
    Number(f64),
    /// Raw text.
    Text(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns `true` for [`Cell::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns `true` for [`Cell::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Borrow the text of a [`Cell::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric value of the cell if it passes [`is_valid_number`].
    ///
    /// Text like `"1.5"` yields `Some(1.5)`; `"5."` or `NaN` yield `None`.
    pub fn numeric_value(&self) -> Option<f64> {
        if !is_valid_number(self) {
            return None;
        }
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `100.0` renders as `100`, `-1.12` as `-1.12`.
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Shape of a structure: `(rows, cols)` for a dataframe, `(len, -1)` for a dataset, `(-1, -1)`
/// for anything that is not tabular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensions {
    /// Rectangular sequence of rows.
    DataFrame { rows: usize, cols: usize },
    /// Flat sequence of scalars.
    Dataset { len: usize },
    /// Not a recognized tabular structure.
    Invalid,
}

impl Dimensions {
    /// The `(rows, cols)` pair using `-1` sentinels.
    pub fn as_pair(&self) -> (i64, i64) {
        match *self {
            Self::DataFrame { rows, cols } => (rows as i64, cols as i64),
            Self::Dataset { len } => (len as i64, -1),
            Self::Invalid => (-1, -1),
        }
    }

    pub fn is_dataframe(&self) -> bool {
        matches!(self, Self::DataFrame { .. })
    }

    pub fn is_dataset(&self) -> bool {
        matches!(self, Self::Dataset { .. })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.as_pair();
        write!(f, "({rows}, {cols})")
    }
}

/// Flat, ordered sequence of cells (one logical column or a list of observations).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    /// Cells in order.
    pub values: Vec<Cell>,
}

impl Dataset {
    /// Create a dataset from cells.
    pub fn new(values: Vec<Cell>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.values.iter()
    }

    /// `Dataset { len }`, or [`Dimensions::Invalid`] when empty.
    pub fn dimensions(&self) -> Dimensions {
        if self.values.is_empty() {
            Dimensions::Invalid
        } else {
            Dimensions::Dataset {
                len: self.values.len(),
            }
        }
    }
}

impl From<Vec<Cell>> for Dataset {
    fn from(values: Vec<Cell>) -> Self {
        Self { values }
    }
}

impl FromIterator<Cell> for Dataset {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Rectangular in-memory table.
///
/// Every row has exactly [`DataFrame::col_count`] cells. Frames built with [`DataFrame::new`]
/// have at least one row; derived frames (slices, filtered loads) may be empty but keep their
/// width.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl DataFrame {
    /// Create a dataframe, validating that it has rows and that they are all the same width.
    pub fn new(rows: Vec<Vec<Cell>>) -> DfrResult<Self> {
        let Some(first) = rows.first() else {
            return Err(DfrError::EmptyInput {
                message: "a dataframe needs at least one row".to_string(),
            });
        };
        let width = first.len();
        check_rectangular(&rows, width)?;
        Ok(Self { rows, width })
    }

    /// A frame with no rows and the given width.
    pub fn empty(width: usize) -> Self {
        Self {
            rows: Vec::new(),
            width,
        }
    }

    /// Caller guarantees every row has `width` cells.
    pub(crate) fn from_parts(rows: Vec<Vec<Cell>>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { rows, width }
    }

    /// Row-major cell storage.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Mutable access to rows; the slice prevents adding or removing rows.
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Cell>] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `(row, col)`, if both are in range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Copy of column `col` as a [`Dataset`], in row order.
    pub fn column(&self, col: usize) -> Option<Dataset> {
        if col >= self.width {
            return None;
        }
        Some(self.rows.iter().map(|r| r[col].clone()).collect())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::DataFrame {
            rows: self.rows.len(),
            cols: self.width,
        }
    }
}

/// Verify every row has `width` cells. Row numbers in errors are 0-based.
pub(crate) fn check_rectangular(rows: &[Vec<Cell>], width: usize) -> DfrResult<()> {
    match rows.iter().position(|r| r.len() != width) {
        Some(row) => Err(DfrError::JaggedRow {
            row,
            expected: width,
            found: rows[row].len(),
        }),
        None => Ok(()),
    }
}

/// Loosely-shaped input, inspected with [`crate::processing::dimensions`].
///
/// Use the `TryFrom` conversions to obtain a typed [`Dataset`] or [`DataFrame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Structure {
    /// Missing value.
    #[default]
    Undefined,
    /// A single cell.
    Scalar(Cell),
    /// An ordered sequence of nested structures.
    Sequence(Vec<Structure>),
}

impl From<Cell> for Structure {
    fn from(cell: Cell) -> Self {
        Self::Scalar(cell)
    }
}

impl From<Vec<Cell>> for Structure {
    fn from(cells: Vec<Cell>) -> Self {
        Self::Sequence(cells.into_iter().map(Self::Scalar).collect())
    }
}

impl From<Vec<Vec<Cell>>> for Structure {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::Sequence(rows.into_iter().map(Self::from).collect())
    }
}

impl From<&Dataset> for Structure {
    fn from(dataset: &Dataset) -> Self {
        Self::from(dataset.values.clone())
    }
}

impl From<&DataFrame> for Structure {
    fn from(frame: &DataFrame) -> Self {
        Self::from(frame.rows.clone())
    }
}

impl From<serde_json::Value> for Structure {
    /// Arrays become sequences, strings and numbers become cells, booleans become text
    /// (`"true"`/`"false"`), and `null` or objects are not tabular.
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Json::String(s) => Self::Scalar(Cell::Text(s)),
            Json::Number(n) => n
                .as_f64()
                .map(|v| Self::Scalar(Cell::Number(v)))
                .unwrap_or_default(),
            Json::Bool(b) => Self::Scalar(Cell::Text(b.to_string())),
            Json::Null | Json::Object(_) => Self::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, DataFrame, Dataset, Dimensions, Structure};
    use crate::error::DfrError;

    #[test]
    fn number_cells_render_without_trailing_zero() {
        assert_eq!(Cell::from(100).to_string(), "100");
        assert_eq!(Cell::from(-1.12).to_string(), "-1.12");
        assert_eq!(Cell::from("North").to_string(), "North");
    }

    #[test]
    fn numeric_value_parses_valid_text_only() {
        assert_eq!(Cell::from("-5.5").numeric_value(), Some(-5.5));
        assert_eq!(Cell::from(19).numeric_value(), Some(19.0));
        assert_eq!(Cell::from("5.").numeric_value(), None);
        assert_eq!(Cell::from(f64::NAN).numeric_value(), None);
    }

    #[test]
    fn cells_deserialize_untagged() {
        let cells: Vec<Cell> = serde_json::from_str(r#"[1000, "1000", "North"]"#).unwrap();
        assert_eq!(
            cells,
            vec![Cell::from(1000), Cell::from("1000"), Cell::from("North")]
        );
    }

    #[test]
    fn dataframe_new_rejects_empty_and_jagged() {
        assert!(matches!(
            DataFrame::new(vec![]),
            Err(DfrError::EmptyInput { .. })
        ));

        let err = DataFrame::new(vec![
            vec![Cell::from("a"), Cell::from("b")],
            vec![Cell::from("c")],
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            DfrError::JaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn dataframe_column_extracts_in_row_order() {
        let df = DataFrame::new(vec![
            vec![Cell::from("North"), Cell::from(1000)],
            vec![Cell::from("South"), Cell::from(1500)],
        ])
        .unwrap();

        assert_eq!(df.dimensions(), Dimensions::DataFrame { rows: 2, cols: 2 });
        assert_eq!(
            df.column(1),
            Some(Dataset::new(vec![Cell::from(1000), Cell::from(1500)]))
        );
        assert_eq!(df.column(2), None);
        assert_eq!(df.get(1, 0), Some(&Cell::from("South")));
    }

    #[test]
    fn dimensions_pair_uses_sentinels() {
        assert_eq!(Dimensions::DataFrame { rows: 3, cols: 3 }.as_pair(), (3, 3));
        assert_eq!(Dimensions::Dataset { len: 3 }.as_pair(), (3, -1));
        assert_eq!(Dimensions::Invalid.as_pair(), (-1, -1));
        assert_eq!(Dimensions::Invalid.to_string(), "(-1, -1)");
    }

    #[test]
    fn json_values_map_to_structures() {
        let json: serde_json::Value = serde_json::json!([["a", 1], null, {"k": 1}, true]);
        let s = Structure::from(json);
        assert_eq!(
            s,
            Structure::Sequence(vec![
                Structure::from(vec![Cell::from("a"), Cell::from(1)]),
                Structure::Undefined,
                Structure::Undefined,
                Structure::Scalar(Cell::from("true")),
            ])
        );
    }
}
