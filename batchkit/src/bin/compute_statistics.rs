//! Descriptive statistics of a file of numbers.
//!
//! ```bash
//! compute_statistics data.txt
//! ```

use batchkit::cli::{fail, start, LogArgs, OutputArgs};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compute_statistics", version)]
#[command(about = "Mean, median, mode, variance and standard deviation of a list of numbers", long_about = None)]
struct Cli {
    /// Input file, one number per line
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = start(|cli: &Cli| &cli.log);

    if let Err(e) = batchkit::stats::run(&cli.input, &cli.output.to_config()) {
        fail(e);
    }
}
