use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use dfr::processing::{is_valid_number, mean, median, total};
use dfr::types::{Cell, Dataset};

fn mixed_dataset(n: usize) -> Dataset {
    (0..n)
        .map(|i| match i % 5 {
            0 => Cell::from("invalid"),
            1 => Cell::from(format!("-{i}.5")),
            _ => Cell::from(i as f64 * 0.75),
        })
        .collect()
}

fn bench_aggregates(c: &mut Criterion) {
    let ds = mixed_dataset(100_000);

    c.bench_function("total_100k", |b| b.iter(|| total(black_box(&ds)).expect("total")));
    c.bench_function("mean_100k", |b| b.iter(|| mean(black_box(&ds)).expect("mean")));
    c.bench_function("median_100k", |b| b.iter(|| median(black_box(&ds)).expect("median")));
    c.bench_function("is_valid_number_100k", |b| {
        b.iter(|| ds.iter().filter(|cell| is_valid_number(black_box(cell))).count())
    });
}

criterion_group!(benches, bench_aggregates);
criterion_main!(benches);
