use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use dfr::execution::{ExecutionEngine, ExecutionOptions};
use dfr::processing::{coerce_column, slice, RowPattern};
use dfr::types::{Cell, DataFrame};

fn protocols(n: usize) -> DataFrame {
    let names = ["tcp", "udp", "icmp"];
    DataFrame::new(
        (0..n)
            .map(|i| {
                vec![
                    Cell::from(names[i % names.len()]),
                    Cell::from(i.to_string()),
                    Cell::from(format!("{}.25", i * 3)),
                    Cell::from("payload"),
                ]
            })
            .collect(),
    )
    .expect("rectangular bench frame")
}

fn bench_slice(c: &mut Criterion) {
    let df = protocols(200_000);
    let tcp = RowPattern::from("tcp");
    let engine = ExecutionEngine::new(ExecutionOptions::default()).expect("engine");

    c.bench_function("slice_sequential_tcp_project_2", |b| {
        b.iter(|| slice(black_box(&df), 0, &tcp, &[0, 2]).expect("slice"))
    });
    c.bench_function("slice_parallel_tcp_project_2", |b| {
        b.iter(|| engine.slice_parallel(black_box(&df), 0, &tcp, &[0, 2]).expect("slice"))
    });
}

fn bench_coerce(c: &mut Criterion) {
    let df = protocols(200_000);
    let engine = ExecutionEngine::new(ExecutionOptions::default()).expect("engine");

    c.bench_function("coerce_sequential", |b| {
        b.iter_batched(
            || df.clone(),
            |mut frame| coerce_column(&mut frame, 2).expect("coerce"),
            criterion::BatchSize::LargeInput,
        )
    });
    c.bench_function("coerce_parallel", |b| {
        b.iter_batched(
            || df.clone(),
            |mut frame| engine.coerce_column_parallel(&mut frame, 2).expect("coerce"),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_slice, bench_coerce);
criterion_main!(benches);
