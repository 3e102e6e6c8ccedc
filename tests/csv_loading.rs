use dfr::ingestion::{file_exists, load_csv, load_table, LoadOptions, TableFormat};
use dfr::types::{Cell, Dimensions};
use dfr::DfrError;

fn text_row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|&s| Cell::from(s)).collect()
}

#[test]
fn file_exists_checks_regular_files() {
    assert!(file_exists("tests/fixtures/sales_data.csv"));
    assert!(!file_exists("tests/fixtures/nonexistent.csv"));
    assert!(!file_exists(""));
    assert!(!file_exists("tests/fixtures"));
}

#[test]
fn load_csv_skips_header_and_reports_source_dimensions() {
    let loaded = load_csv("tests/fixtures/sales_data.csv", &[0], &[]).unwrap();

    assert_eq!(
        loaded.source_dimensions,
        Dimensions::DataFrame { rows: 7, cols: 7 }
    );
    assert_eq!(loaded.frame.row_count(), 6);
    assert_eq!(
        loaded.frame.rows()[0],
        text_row(&[
            "2024-01-15",
            "North",
            "Laptop",
            "5",
            "999.99",
            "4999.95",
            "completed"
        ])
    );
}

#[test]
fn load_csv_excludes_columns_but_keeps_original_dimensions() {
    let (frame, rows, cols) = load_csv("tests/fixtures/sales_data.csv", &[0, 2], &[0, 3, 4, 6])
        .unwrap()
        .into_parts();

    assert_eq!((rows, cols), (7, 7));
    assert_eq!(frame.col_count(), 3);
    assert_eq!(frame.row_count(), 5);
    assert_eq!(frame.rows()[1], text_row(&["East", "Tablet", "899.97"]));
}

#[test]
fn load_csv_reports_missing_file() {
    let err = load_csv("tests/fixtures/nonexistent.csv", &[], &[]).unwrap_err();
    assert!(matches!(err, DfrError::FileNotFound { .. }));
    assert_eq!(err.dimensions().as_pair(), (-1, -1));
    assert!(err.to_string().contains("nonexistent.csv"));
}

#[test]
fn load_csv_rejects_jagged_rows() {
    let err = load_csv("tests/fixtures/jagged.csv", &[], &[]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("jagged row 1"));
    assert!(msg.contains("expected 3 columns, found 2"));
}

#[test]
fn load_table_infers_tsv_from_extension() {
    let loaded = load_table("tests/fixtures/regions.tsv", &[0], &[2], &LoadOptions::default()).unwrap();
    assert_eq!(
        loaded.frame.into_rows(),
        vec![text_row(&["North", "1000"]), text_row(&["South", "1500"])]
    );
    assert_eq!(loaded.source_dimensions.as_pair(), (3, 3));
}

#[test]
fn load_table_can_force_a_format() {
    let opts = LoadOptions {
        format: Some(TableFormat::Csv),
        ..Default::default()
    };
    // Read as CSV, each tab-separated line is a single field.
    let loaded = load_table("tests/fixtures/regions.tsv", &[], &[], &opts).unwrap();
    assert_eq!(loaded.frame.col_count(), 1);
    assert_eq!(loaded.frame.rows()[1], vec![Cell::from("North\t1000\t50")]);
}
