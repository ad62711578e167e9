//! Plain-text report rendering and writing.
//!
//! The layout is fixed: a species section, a blank separator line, then an
//! island section. Lines follow the iteration order of the tables, which is
//! first-seen order from the input file, so identical input always renders
//! byte-identical output.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::StatsResult;
use crate::types::OrderedMap;

const SPECIES_HEADER: &str = "Average Body Mass by Species:";
const ISLAND_HEADER: &str = "Percentage of Penguins Above Avg Flipper Length by Island:";

/// Render both summary tables into the report document.
///
/// Masses print with one decimal place; percentages are already rounded to
/// one decimal by the aggregation and print the same way.
pub fn render(avg_mass: &OrderedMap<f64>, flipper_stats: &OrderedMap<f64>) -> String {
    let mut out = String::new();

    out.push_str(SPECIES_HEADER);
    out.push('\n');
    for (species, mass) in avg_mass.iter() {
        let _ = writeln!(out, "{species}: {mass:.1} g");
    }

    out.push('\n');
    out.push_str(ISLAND_HEADER);
    out.push('\n');
    for (island, pct) in flipper_stats.iter() {
        let _ = writeln!(out, "{island}: {pct:.1}%");
    }

    out
}

/// Render the report and write it to `path`, overwriting any existing file.
pub fn write_to_path(
    path: impl AsRef<Path>,
    avg_mass: &OrderedMap<f64>,
    flipper_stats: &OrderedMap<f64>,
) -> StatsResult<()> {
    fs::write(path, render(avg_mass, flipper_stats))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::types::OrderedMap;

    #[test]
    fn render_follows_table_iteration_order() {
        let avg_mass: OrderedMap<f64> = [
            ("Gentoo".to_string(), 5076.0),
            ("Adelie".to_string(), 3700.66),
        ]
        .into_iter()
        .collect();
        let flipper: OrderedMap<f64> = [
            ("Biscoe".to_string(), 78.9),
            ("Torgersen".to_string(), 0.0),
        ]
        .into_iter()
        .collect();

        let doc = render(&avg_mass, &flipper);
        assert_eq!(
            doc,
            "Average Body Mass by Species:\n\
             Gentoo: 5076.0 g\n\
             Adelie: 3700.7 g\n\
             \n\
             Percentage of Penguins Above Avg Flipper Length by Island:\n\
             Biscoe: 78.9%\n\
             Torgersen: 0.0%\n"
        );
    }

    #[test]
    fn render_with_empty_species_table_keeps_layout() {
        let avg_mass: OrderedMap<f64> = OrderedMap::new();
        let flipper: OrderedMap<f64> = [("X".to_string(), 50.0)].into_iter().collect();

        let doc = render(&avg_mass, &flipper);
        assert_eq!(
            doc,
            "Average Body Mass by Species:\n\
             \n\
             Percentage of Penguins Above Avg Flipper Length by Island:\n\
             X: 50.0%\n"
        );
    }
}
