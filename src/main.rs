use std::sync::Arc;

use penguin_stats::observability::StdErrObserver;
use penguin_stats::pipeline::{run, RunOptions};
use penguin_stats::StatsError;

const INPUT: &str = "penguins.csv";
const OUTPUT: &str = "penguin_results.txt";

fn main() -> Result<(), StatsError> {
    let options = RunOptions {
        observer: Some(Arc::new(StdErrObserver)),
        ..Default::default()
    };

    run(INPUT, OUTPUT, &options)?;
    println!("Results written to {OUTPUT}");
    Ok(())
}
