//! Summary statistics over a loaded [`DataSet`].
//!
//! Two independent tables are computed from the same record scan rules:
//!
//! - [`mean_body_mass_by_species`]: mean `body_mass_g` per species
//! - [`above_avg_flipper_by_island`]: percentage of `flipper_length_mm`
//!   observations per island strictly above the dataset-wide mean
//!
//! Missing values (empty cell or the `NA` sentinel) are skipped per-field: a
//! row with no mass still contributes its flipper value, and vice versa. A
//! non-missing cell that fails numeric parsing aborts the run with
//! [`StatsError::ParseError`].
//!
//! Table keys appear in first-seen row order, which is what the report
//! iterates in.

use crate::error::{StatsError, StatsResult};
use crate::types::{DataSet, OrderedMap};

/// Column holding the species category.
pub const SPECIES: &str = "species";
/// Column holding the island category.
pub const ISLAND: &str = "island";
/// Column holding body mass in grams.
pub const BODY_MASS_G: &str = "body_mass_g";
/// Column holding flipper length in millimetres.
pub const FLIPPER_LENGTH_MM: &str = "flipper_length_mm";

/// Missing-value sentinel used by the Palmer Penguins CSV.
const MISSING_SENTINEL: &str = "NA";

/// Parse an optional numeric cell.
///
/// Returns `Ok(None)` for a missing value (the empty string or the literal
/// `NA` sentinel, nothing else), `Ok(Some(v))` for a valid number, and a
/// [`StatsError::ParseError`] for anything else. Both aggregations go through
/// this single helper so the sentinel check lives in exactly one place.
///
/// The missing check is exact: a whitespace-only cell is not missing and
/// fails as unparseable. Surrounding whitespace around an actual number is
/// tolerated.
///
/// `row` is the 1-based data row number as a user would count it in the file
/// (header is row 1).
pub fn parse_optional_numeric(raw: &str, row: usize, column: &str) -> StatsResult<Option<f64>> {
    if raw.is_empty() || raw == MISSING_SENTINEL {
        return Ok(None);
    }
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|e| StatsError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}

fn require_column(ds: &DataSet, name: &str) -> StatsResult<usize> {
    ds.index_of(name).ok_or_else(|| StatsError::MissingColumn {
        column: name.to_owned(),
        headers: ds.columns.clone(),
    })
}

// Header is file row 1, so data row i is file row i + 2.
fn user_row(row_idx: usize) -> usize {
    row_idx + 2
}

/// Mean body mass (grams) per species, keyed in first-seen species order.
///
/// Running sum and count are accumulated per species; the division happens
/// once per species at the end. Species with zero valid mass observations are
/// absent from the table, so an all-missing dataset yields an empty table
/// rather than an error.
pub fn mean_body_mass_by_species(ds: &DataSet) -> StatsResult<OrderedMap<f64>> {
    let species_idx = require_column(ds, SPECIES)?;
    let mass_idx = require_column(ds, BODY_MASS_G)?;

    let mut totals: OrderedMap<(f64, u64)> = OrderedMap::new();
    for row_idx in 0..ds.row_count() {
        let raw = ds.cell(row_idx, mass_idx);
        let Some(mass) = parse_optional_numeric(raw, user_row(row_idx), BODY_MASS_G)? else {
            continue;
        };
        let species = ds.cell(row_idx, species_idx);
        let (sum, count) = totals.entry_or_insert(species, (0.0, 0));
        *sum += mass;
        *count += 1;
    }

    Ok(totals.map_values(|(sum, count)| sum / count as f64))
}

/// Percentage of observations per island whose flipper length strictly
/// exceeds the dataset-wide mean flipper length, rounded to one decimal.
///
/// Two passes: the first collects every valid flipper value regardless of
/// island and computes the global mean; the second counts per-island totals
/// and strictly-above hits. A value exactly equal to the global mean does not
/// count as above.
///
/// Errors with [`StatsError::NoValidValues`] when the dataset has no valid
/// flipper values at all; the global mean is undefined there and must not
/// silently become NaN.
pub fn above_avg_flipper_by_island(ds: &DataSet) -> StatsResult<OrderedMap<f64>> {
    let island_idx = require_column(ds, ISLAND)?;
    let flipper_idx = require_column(ds, FLIPPER_LENGTH_MM)?;

    let mut sum = 0.0;
    let mut count: u64 = 0;
    for row_idx in 0..ds.row_count() {
        let raw = ds.cell(row_idx, flipper_idx);
        if let Some(v) = parse_optional_numeric(raw, user_row(row_idx), FLIPPER_LENGTH_MM)? {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        return Err(StatsError::NoValidValues {
            column: FLIPPER_LENGTH_MM.to_owned(),
        });
    }
    let global_avg = sum / count as f64;

    let mut tallies: OrderedMap<(u64, u64)> = OrderedMap::new();
    for row_idx in 0..ds.row_count() {
        let raw = ds.cell(row_idx, flipper_idx);
        let Some(flipper) = parse_optional_numeric(raw, user_row(row_idx), FLIPPER_LENGTH_MM)?
        else {
            continue;
        };
        let island = ds.cell(row_idx, island_idx);
        let (above, total) = tallies.entry_or_insert(island, (0, 0));
        *total += 1;
        if flipper > global_avg {
            *above += 1;
        }
    }

    Ok(tallies.map_values(|(above, total)| round1(above as f64 / total as f64 * 100.0)))
}

/// Round to one decimal place, ties to even (so 6.25 becomes 6.2).
fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}
