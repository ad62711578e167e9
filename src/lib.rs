//! `penguin-stats` computes summary statistics over the Palmer Penguins
//! dataset and writes a plain-text report.
//!
//! The pipeline is a single-pass, in-memory batch with three stages:
//!
//! 1. **Load**: [`ingest::load_csv_from_path`] reads a headered CSV into an
//!    in-memory [`types::DataSet`] of raw string cells.
//! 2. **Aggregate**: [`stats::mean_body_mass_by_species`] and
//!    [`stats::above_avg_flipper_by_island`] compute the two summary tables.
//!    Missing values (empty cell or the `NA` sentinel) are skipped per-field;
//!    anything else that fails numeric parsing aborts the run.
//! 3. **Report**: [`report::write_to_path`] renders both tables into a fixed
//!    two-section text document, in first-seen key order.
//!
//! Most callers should use [`pipeline::run`], which wires the stages together
//! and optionally reports outcomes to a [`observability::RunObserver`].
//!
//! ## Quick example
//!
//! ```no_run
//! use penguin_stats::pipeline::{run, RunOptions};
//!
//! # fn main() -> Result<(), penguin_stats::StatsError> {
//! let stats = run("penguins.csv", "penguin_results.txt", &RunOptions::default())?;
//! println!("rows={} species={}", stats.rows, stats.species);
//! # Ok(())
//! # }
//! ```
//!
//! ## Stage-by-stage
//!
//! ```rust
//! use penguin_stats::{ingest, report, stats};
//!
//! # fn main() -> Result<(), penguin_stats::StatsError> {
//! let input = "species,island,body_mass_g,flipper_length_mm\n\
//!              Adelie,Torgersen,3750,181\n\
//!              Gentoo,Biscoe,5000,217\n";
//! let mut rdr = csv::ReaderBuilder::new()
//!     .has_headers(true)
//!     .from_reader(input.as_bytes());
//!
//! let ds = ingest::load_csv_from_reader(&mut rdr)?;
//! let avg_mass = stats::mean_body_mass_by_species(&ds)?;
//! let flipper = stats::above_avg_flipper_by_island(&ds)?;
//!
//! let doc = report::render(&avg_mass, &flipper);
//! assert!(doc.starts_with("Average Body Mass by Species:\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingest`]: CSV loading into a [`types::DataSet`]
//! - [`stats`]: the two aggregations and the shared optional-numeric parser
//! - [`report`]: fixed-format text rendering and file output
//! - [`pipeline`]: unified load → aggregate → report entrypoint
//! - [`observability`]: run observers (stderr/file/composite) and severities
//! - [`error`]: the crate-wide error type
//!
//! ## Report format
//!
//! The output layout is fixed: a species section (`{species}: {mass} g`, mass
//! to one decimal), a blank line, then an island section (`{island}: {pct}%`,
//! percentage to one decimal). Line order follows first-seen order of keys in
//! the input, so identical input produces byte-identical output.

pub mod error;
pub mod ingest;
pub mod observability;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod types;

pub use error::{StatsError, StatsResult};
