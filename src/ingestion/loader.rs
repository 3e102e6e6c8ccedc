//! Table loading entrypoint.
//!
//! Most callers should use [`load_csv`] or [`load_table`], which read a delimited file into a
//! [`DataFrame`] with some rows and columns excluded, and report the source's original size.
//!
//! - If [`LoadOptions::format`] is `None`, the delimiter is inferred from the file extension.
//! - If a [`LoadObserver`] is provided, success/failure/alerts are reported to it.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::{DfrError, DfrResult};
use crate::types::{check_rectangular, Cell, DataFrame, Dimensions};

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Supported delimited-text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl TableFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            _ => None,
        }
    }

    /// Field delimiter byte.
    pub fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }

    /// Format for `path` by extension; unknown or missing extensions are read as CSV.
    pub fn infer(path: &Path) -> Self {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Self::Csv)
    }
}

/// Options controlling [`load_table`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<TableFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Result of a load: the filtered frame plus the dimensions of the unfiltered source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    /// Source rows and columns minus the excluded ones.
    pub frame: DataFrame,
    /// `(rows, cols)` of the full source, before any exclusion.
    pub source_dimensions: Dimensions,
}

impl LoadedTable {
    /// Apply row then column exclusions to tokenized rows.
    ///
    /// The rows must be non-empty and rectangular. Exclusion indices past the end of the table
    /// are ignored.
    pub fn from_rows(
        rows: Vec<Vec<Cell>>,
        ignore_rows: &[usize],
        ignore_cols: &[usize],
    ) -> DfrResult<Self> {
        let Some(first) = rows.first() else {
            return Err(DfrError::EmptyInput {
                message: "no rows to load".to_string(),
            });
        };
        let width = first.len();
        check_rectangular(&rows, width)?;
        let source_dimensions = Dimensions::DataFrame {
            rows: rows.len(),
            cols: width,
        };

        let skip_rows: HashSet<usize> = ignore_rows.iter().copied().collect();
        let skip_cols: HashSet<usize> = ignore_cols.iter().copied().collect();
        let keep_cols: Vec<usize> = (0..width).filter(|c| !skip_cols.contains(c)).collect();
        let all_cols = keep_cols.len() == width;

        let kept = rows
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !skip_rows.contains(idx))
            .map(|(_, row)| {
                if all_cols {
                    row
                } else {
                    keep_cols.iter().map(|&c| row[c].clone()).collect()
                }
            })
            .collect();

        Ok(Self {
            frame: DataFrame::from_parts(kept, keep_cols.len()),
            source_dimensions,
        })
    }

    /// `(frame, source_rows, source_cols)`.
    pub fn into_parts(self) -> (DataFrame, i64, i64) {
        let (rows, cols) = self.source_dimensions.as_pair();
        (self.frame, rows, cols)
    }

    fn stats(&self) -> LoadStats {
        let (source_rows, source_cols) = match self.source_dimensions {
            Dimensions::DataFrame { rows, cols } => (rows, cols),
            _ => (0, 0),
        };
        LoadStats {
            source_rows,
            source_cols,
            rows: self.frame.row_count(),
            cols: self.frame.col_count(),
        }
    }
}

/// Returns `true` if `path` names an existing regular file. An empty path is never a file.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Load a comma-separated file, excluding the given row and column indices (0-based).
///
/// Shorthand for [`load_table`] with [`TableFormat::Csv`] and no observer.
///
/// ```no_run
/// use dfr::ingestion::load_csv;
///
/// # fn main() -> Result<(), dfr::DfrError> {
/// // Skip the header row, keep every column.
/// let loaded = load_csv("sales_data.csv", &[0], &[])?;
/// println!("source={} kept_rows={}", loaded.source_dimensions, loaded.frame.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_csv(
    path: impl AsRef<Path>,
    ignore_rows: &[usize],
    ignore_cols: &[usize],
) -> DfrResult<LoadedTable> {
    let opts = LoadOptions {
        format: Some(TableFormat::Csv),
        ..Default::default()
    };
    load_table(path, ignore_rows, ignore_cols, &opts)
}

/// Load a delimited file into a [`LoadedTable`].
///
/// - A path that is not an existing file returns [`DfrError::FileNotFound`] without reading.
/// - An empty file returns [`DfrError::EmptyInput`]; rows of unequal width return
///   [`DfrError::JaggedRow`].
/// - Rows listed in `ignore_rows` are dropped first, then columns listed in `ignore_cols`.
///   The remaining rows and columns keep their original order.
/// - [`LoadedTable::source_dimensions`] always describes the full file.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` with source and kept sizes
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn load_table(
    path: impl AsRef<Path>,
    ignore_rows: &[usize],
    ignore_cols: &[usize],
    options: &LoadOptions,
) -> DfrResult<LoadedTable> {
    let path = path.as_ref();
    let format = options.format.unwrap_or_else(|| TableFormat::infer(path));
    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = if file_exists(path) {
        csv::read_rows_from_path(path, format.delimiter())
            .and_then(|rows| LoadedTable::from_rows(rows, ignore_rows, ignore_cols))
    } else {
        Err(DfrError::FileNotFound {
            path: path.to_path_buf(),
        })
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(&ctx, table.stats()),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Load delimited text from any reader.
pub fn load_table_from_reader<R: Read>(
    reader: R,
    format: TableFormat,
    ignore_rows: &[usize],
    ignore_cols: &[usize],
) -> DfrResult<LoadedTable> {
    let mut rdr = csv::reader_builder(format.delimiter()).from_reader(reader);
    let rows = csv::read_rows_from_reader(&mut rdr)?;
    LoadedTable::from_rows(rows, ignore_rows, ignore_cols)
}

fn severity_for_error(e: &DfrError) -> LoadSeverity {
    match e {
        DfrError::Io(_) | DfrError::FileNotFound { .. } => LoadSeverity::Critical,
        DfrError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
