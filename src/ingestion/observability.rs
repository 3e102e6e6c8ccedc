use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::DfrError;

use super::loader::TableFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// The load failed because of the data (jagged rows, bad quoting, empty file).
    Error,
    /// The load failed because the source could not be read at all (missing file, I/O).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path.
    pub path: PathBuf,
    /// Format used to tokenize the input.
    pub format: TableFormat,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows in the source before exclusions.
    pub source_rows: usize,
    /// Columns in the source before exclusions.
    pub source_cols: usize,
    /// Rows kept after exclusions.
    pub rows: usize,
    /// Columns kept after exclusions.
    pub cols: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, write logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &DfrError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!("[load][ok] {}", success_line(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        eprintln!("[load][{severity:?}] {}", failure_line(ctx, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        eprintln!("[ALERT][load][{severity:?}] {}", failure_line(ctx, error));
    }
}

/// Appends load events to a local log file.
///
/// Writes are best-effort; failures to open or write the log file are ignored.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {line}", unix_ts());
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!("ok {}", success_line(ctx, stats)));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        self.append_line(&format!(
            "fail severity={severity:?} {}",
            failure_line(ctx, error)
        ));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &DfrError) {
        self.append_line(&format!(
            "ALERT severity={severity:?} {}",
            failure_line(ctx, error)
        ));
    }
}

fn success_line(ctx: &LoadContext, stats: LoadStats) -> String {
    format!(
        "format={:?} path={} source={}x{} kept={}x{}",
        ctx.format,
        ctx.path.display(),
        stats.source_rows,
        stats.source_cols,
        stats.rows,
        stats.cols
    )
}

fn failure_line(ctx: &LoadContext, error: &DfrError) -> String {
    format!(
        "format={:?} path={} err={error}",
        ctx.format,
        ctx.path.display()
    )
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
