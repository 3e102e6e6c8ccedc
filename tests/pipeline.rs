use dfr::execution::{ExecutionEngine, ExecutionOptions};
use dfr::ingestion::load_csv;
use dfr::processing::{coerce_column, flatten, mean, median, slice, total, ReduceOp, RowPattern};
use dfr::types::Cell;
use dfr::DfrError;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn load_slice_flatten_total() {
    let mut sales = load_csv("tests/fixtures/sales_data.csv", &[0], &[])
        .unwrap()
        .frame;

    assert_eq!(coerce_column(&mut sales, 3).unwrap(), 6);
    assert_eq!(sales.get(0, 3), Some(&Cell::Number(5.0)));

    let north = slice(&sales, 1, &RowPattern::from("North"), &[5]).unwrap();
    let north_sales = flatten(&north).unwrap();
    assert_eq!(north_sales.len(), 2);
    assert_close(total(&north_sales).unwrap(), 7099.92);
}

#[test]
fn invalid_cells_are_skipped_across_the_pipeline() {
    let mut sales = load_csv("tests/fixtures/sales_data.csv", &[0], &[]).unwrap().frame;

    // The last row's total is "n/a" and stays text.
    assert_eq!(coerce_column(&mut sales, 5).unwrap(), 5);
    assert_eq!(sales.get(5, 5), Some(&Cell::from("n/a")));

    let south = flatten(&slice(&sales, 1, &RowPattern::from("South"), &[5]).unwrap()).unwrap();
    assert_close(total(&south).unwrap(), 4999.90);
    assert_close(mean(&south).unwrap(), 4999.90);
    assert_close(median(&south).unwrap(), 4999.90);

    let all_totals = sales.column(5).unwrap();
    assert_close(median(&all_totals).unwrap(), 2099.97);
}

#[test]
fn header_rows_can_be_selected_with_wildcard() {
    let sales = load_csv("tests/fixtures/sales_data.csv", &[], &[]).unwrap().frame;
    let projected = slice(&sales, 0, &RowPattern::from("*"), &[6, 1]).unwrap();

    assert_eq!(projected.row_count(), 7);
    assert_eq!(
        projected.rows()[0],
        vec![Cell::from("status"), Cell::from("region")]
    );
}

#[test]
fn flattening_a_multi_column_slice_fails() {
    let sales = load_csv("tests/fixtures/sales_data.csv", &[0], &[]).unwrap().frame;
    let wide = slice(&sales, 1, &RowPattern::from("North"), &[]).unwrap();
    assert!(matches!(flatten(&wide), Err(DfrError::InvalidShape { .. })));

    let none = slice(&sales, 1, &RowPattern::from("Nowhere"), &[5]).unwrap();
    assert!(none.is_empty());
    assert!(flatten(&none).is_err());
}

#[test]
fn engine_pipeline_matches_sequential() {
    let engine = ExecutionEngine::new(ExecutionOptions {
        num_threads: Some(2),
        chunk_size: 2,
        max_in_flight_chunks: 2,
    })
    .unwrap();

    let mut sales = load_csv("tests/fixtures/sales_data.csv", &[0], &[]).unwrap().frame;
    assert_eq!(engine.coerce_column_parallel(&mut sales, 5).unwrap(), 5);

    let north = engine
        .slice_parallel(&sales, 1, &RowPattern::from("North"), &[5])
        .unwrap();
    let north_total = engine.reduce(&flatten(&north).unwrap(), ReduceOp::Total).unwrap();
    assert_close(north_total, 7099.92);

    let snap = engine.metrics().snapshot();
    assert_eq!(snap.rows_processed, 2);
    assert_eq!(snap.run_id, 3);
}
