//! CSV loading into an in-memory [`DataSet`].
//!
//! Rules:
//!
//! - The CSV must have a header row; the dataset's columns are exactly those
//!   headers, in file order. Extra columns are kept (aggregations look up the
//!   ones they need by name).
//! - Cells are stored as raw strings; numeric parsing happens later in
//!   [`crate::stats`].
//! - I/O and malformed-CSV errors propagate to the caller. No recovery.

use std::path::Path;

use crate::error::StatsResult;
use crate::types::DataSet;

/// Load a CSV file into an in-memory [`DataSet`].
///
/// The file handle is scoped to this call and released on return, error
/// included.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> StatsResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> StatsResult<DataSet> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(DataSet::new(columns, rows))
}
