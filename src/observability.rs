use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::StatsError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (run failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about a pipeline run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Input CSV path for the run.
    pub input: PathBuf,
    /// Output report path for the run.
    pub output: PathBuf,
}

/// Minimal stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of loaded rows.
    pub rows: usize,
    /// Number of species in the report.
    pub species: usize,
    /// Number of islands in the report.
    pub islands: usize,
}

/// Observer interface for pipeline run outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait RunObserver: Send + Sync {
    /// Called when a run succeeds.
    fn on_success(&self, _ctx: &RunContext, _stats: RunStats) {}

    /// Called when a run fails.
    fn on_failure(&self, _ctx: &RunContext, _severity: RunSeverity, _error: &StatsError) {}

    /// Called when a run failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn RunObserver>>) -> Self {
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

impl RunObserver for CompositeObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs run events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl RunObserver for StdErrObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        eprintln!(
            "[run][ok] input={} rows={} species={} islands={}",
            ctx.input.display(),
            stats.rows,
            stats.species,
            stats.islands
        );
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        eprintln!(
            "[run][{:?}] input={} err={}",
            severity,
            ctx.input.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        eprintln!(
            "[ALERT][run][{:?}] input={} err={}",
            severity,
            ctx.input.display(),
            error
        );
    }
}

/// Appends run events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl RunObserver for FileObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        self.append_line(&format!(
            "{} ok input={} rows={} species={} islands={}",
            unix_ts(),
            ctx.input.display(),
            stats.rows,
            stats.species,
            stats.islands
        ));
    }

    fn on_failure(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        self.append_line(&format!(
            "{} fail severity={:?} input={} err={}",
            unix_ts(),
            severity,
            ctx.input.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &RunContext, severity: RunSeverity, error: &StatsError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} input={} err={}",
            unix_ts(),
            severity,
            ctx.input.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
