//! Execution engine for running row scans with configurable parallelism.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Parallel (chunked) slicing and column coercion
//! - Throttling of concurrently running chunks
//! - Real-time metrics + observer hooks for monitoring
//!
//! Results are identical to the sequential functions in [`crate::processing`]: chunks are
//! disjoint row ranges and their outputs are concatenated in row order.

mod observer;
mod permits;

use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::error::{DfrError, DfrResult};
use crate::processing::coerce::{check_column, coerce_cell};
use crate::processing::slice::{check_slice_args, output_width, project_row};
use crate::processing::{reduce, ReduceOp, RowPattern};
use crate::types::{DataFrame, Dataset};

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, Operation,
    StdErrExecutionObserver,
};

use permits::ChunkPermits;

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of rows per chunk.
    pub chunk_size: usize,
    /// Upper bound on concurrently executing chunks, on top of `num_threads`.
    pub max_in_flight_chunks: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = available_threads();
        Self {
            num_threads: Some(n),
            chunk_size: 4_096,
            max_in_flight_chunks: n,
        }
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// A configurable execution engine for dataframe scans.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine.
    ///
    /// Returns [`DfrError::InvalidOptions`] if `chunk_size`, `max_in_flight_chunks` or
    /// `num_threads` is zero.
    pub fn new(opts: ExecutionOptions) -> DfrResult<Self> {
        if opts.chunk_size == 0 {
            return Err(invalid_options("chunk_size must be > 0"));
        }
        if opts.max_in_flight_chunks == 0 {
            return Err(invalid_options("max_in_flight_chunks must be > 0"));
        }
        if opts.num_threads == Some(0) {
            return Err(invalid_options("num_threads must be > 0 when set"));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(opts.num_threads.unwrap_or_else(available_threads))
            .build()?;

        Ok(Self {
            pool,
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Parallel [`crate::processing::slice`].
    pub fn slice_parallel(
        &self,
        dataframe: &DataFrame,
        col: usize,
        pattern: &RowPattern,
        export_cols: &[usize],
    ) -> DfrResult<DataFrame> {
        check_slice_args(dataframe, col, pattern, export_cols)?;
        Ok(self
            .pool
            .install(|| self.slice_parallel_impl(dataframe, col, pattern, export_cols)))
    }

    fn slice_parallel_impl(
        &self,
        dataframe: &DataFrame,
        col: usize,
        pattern: &RowPattern,
        export_cols: &[usize],
    ) -> DataFrame {
        let start = self.begin_run(Operation::Slice);
        let permits = ChunkPermits::new(self.opts.max_in_flight_chunks);
        let rows = dataframe.rows();

        let per_chunk: Vec<_> = chunk_ranges(rows.len(), self.opts.chunk_size)
            .into_par_iter()
            .map(|range| {
                let start_row = range.start;
                let chunk = &rows[range];
                self.run_chunk(&permits, start_row, chunk.len(), || {
                    let out: Vec<_> = chunk
                        .iter()
                        .filter(|row| pattern.matches(row, col))
                        .map(|row| project_row(row, export_cols))
                        .collect();
                    let kept = out.len();
                    (out, kept)
                })
            })
            .collect();

        let out = DataFrame::from_parts(
            per_chunk.into_iter().flatten().collect(),
            output_width(dataframe, export_cols),
        );
        self.finish_run(start);
        out
    }

    /// Parallel [`crate::processing::coerce_column`]; mutates `dataframe` in place and returns
    /// the number of converted cells.
    pub fn coerce_column_parallel(&self, dataframe: &mut DataFrame, col: usize) -> DfrResult<usize> {
        check_column(dataframe, col)?;
        Ok(self
            .pool
            .install(|| self.coerce_column_parallel_impl(dataframe, col)))
    }

    fn coerce_column_parallel_impl(&self, dataframe: &mut DataFrame, col: usize) -> usize {
        let start = self.begin_run(Operation::Coerce);
        let permits = ChunkPermits::new(self.opts.max_in_flight_chunks);
        let chunk_size = self.opts.chunk_size;

        let converted: usize = dataframe
            .rows_mut()
            .par_chunks_mut(chunk_size)
            .enumerate()
            .map(|(idx, chunk)| {
                let row_count = chunk.len();
                self.run_chunk(&permits, idx * chunk_size, row_count, || {
                    let n = chunk
                        .iter_mut()
                        .map(|row| coerce_cell(&mut row[col]))
                        .filter(|&converted| converted)
                        .count();
                    self.metrics.on_cells_converted(n);
                    (n, n)
                })
            })
            .sum();

        self.finish_run(start);
        converted
    }

    /// Aggregate a dataset with [`crate::processing::reduce`].
    ///
    /// This is sequential, but is tracked via the observer/metrics hooks.
    pub fn reduce(&self, dataset: &Dataset, op: ReduceOp) -> DfrResult<f64> {
        let start = self.begin_run(Operation::Reduce(op));
        self.metrics.on_rows_processed(dataset.len());

        let out = reduce(dataset, op);

        self.emit(ExecutionEvent::ReduceFinished {
            result: out.as_ref().ok().copied(),
        });
        self.finish_run(start);
        out
    }

    /// Runs `work` for one chunk while holding a permit. `work` returns its output and the
    /// count reported in [`ExecutionEvent::ChunkFinished`].
    fn run_chunk<T>(
        &self,
        permits: &ChunkPermits,
        start_row: usize,
        row_count: usize,
        work: impl FnOnce() -> (T, usize),
    ) -> T {
        let (_permit, waited) = permits.acquire();
        if waited > Duration::ZERO {
            self.metrics.on_throttle_wait(waited);
            self.emit(ExecutionEvent::ThrottleWaited { duration: waited });
        }

        self.metrics.on_chunk_start();
        self.emit(ExecutionEvent::ChunkStarted {
            start_row,
            row_count,
        });

        let (out, output_rows) = work();
        self.metrics.on_rows_processed(row_count);

        self.emit(ExecutionEvent::ChunkFinished {
            start_row,
            output_rows,
        });
        self.metrics.on_chunk_end();
        out
    }

    fn begin_run(&self, operation: Operation) -> Instant {
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted { operation });
        Instant::now()
    }

    fn finish_run(&self, start: Instant) {
        let elapsed = start.elapsed();
        self.metrics.end_run(elapsed);
        self.emit(ExecutionEvent::RunFinished {
            elapsed,
            metrics: self.metrics.snapshot(),
        });
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

fn invalid_options(message: &str) -> DfrError {
    DfrError::InvalidOptions {
        message: message.to_string(),
    }
}

fn chunk_ranges(row_count: usize, chunk_size: usize) -> Vec<Range<usize>> {
    (0..row_count)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(row_count))
        .collect()
}
