//! Unified pipeline entrypoint.
//!
//! [`run`] executes the whole batch: load the input CSV into a
//! [`crate::types::DataSet`], compute both summary tables, and write the
//! report. The stages run sequentially and each consumes the prior stage's
//! complete output; any failure aborts the run and propagates.
//!
//! When an observer is configured, the run reports:
//!
//! - `on_success` on success, with row and table counts
//! - `on_failure` on failure, with a computed severity
//! - `on_alert` on failure when the computed severity is >=
//!   `options.alert_at_or_above`

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{StatsError, StatsResult};
use crate::observability::{RunContext, RunObserver, RunSeverity, RunStats};
use crate::{ingest, report, stats};

/// Options controlling pipeline behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct RunOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn RunObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: RunSeverity,
}

impl fmt::Debug for RunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: RunSeverity::Critical,
        }
    }
}

/// Run the full load → aggregate → report pipeline.
///
/// Reads the CSV at `input`, computes mean body mass per species and the
/// above-average flipper percentage per island, and writes the report to
/// `output` (overwriting any existing file).
///
/// # Examples
///
/// ```no_run
/// use penguin_stats::pipeline::{run, RunOptions};
///
/// # fn main() -> Result<(), penguin_stats::StatsError> {
/// let stats = run("penguins.csv", "penguin_results.txt", &RunOptions::default())?;
/// println!("rows={}", stats.rows);
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use penguin_stats::observability::{RunSeverity, StdErrObserver};
/// use penguin_stats::pipeline::{run, RunOptions};
///
/// let opts = RunOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: RunSeverity::Critical,
/// };
///
/// // Missing input files are Critical and will trigger `on_alert` here.
/// let _err = run("does_not_exist.csv", "out.txt", &opts).unwrap_err();
/// ```
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RunOptions,
) -> StatsResult<RunStats> {
    let ctx = RunContext {
        input: input.as_ref().to_path_buf(),
        output: output.as_ref().to_path_buf(),
    };

    let result = run_inner(&ctx);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(run_stats) => obs.on_success(&ctx, *run_stats),
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

fn run_inner(ctx: &RunContext) -> StatsResult<RunStats> {
    let ds = ingest::load_csv_from_path(&ctx.input)?;
    let avg_mass = stats::mean_body_mass_by_species(&ds)?;
    let flipper_stats = stats::above_avg_flipper_by_island(&ds)?;
    report::write_to_path(&ctx.output, &avg_mass, &flipper_stats)?;

    Ok(RunStats {
        rows: ds.row_count(),
        species: avg_mass.len(),
        islands: flipper_stats.len(),
    })
}

fn severity_for_error(e: &StatsError) -> RunSeverity {
    match e {
        StatsError::Io(_) => RunSeverity::Critical,
        StatsError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => RunSeverity::Critical,
            _ => RunSeverity::Error,
        },
        StatsError::MissingColumn { .. } => RunSeverity::Error,
        StatsError::ParseError { .. } => RunSeverity::Error,
        StatsError::NoValidValues { .. } => RunSeverity::Error,
    }
}
