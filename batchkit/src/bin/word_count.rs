//! Count word frequencies in a text file.
//!
//! ```bash
//! word_count data.txt
//! ```

use batchkit::cli::{fail, start, LogArgs, OutputArgs};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "word_count", version)]
#[command(about = "Count how often each word appears in a text file", long_about = None)]
struct Cli {
    /// Input text file
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = start(|cli: &Cli| &cli.log);

    if let Err(e) = batchkit::words::run(&cli.input, &cli.output.to_config()) {
        fail(e);
    }
}
