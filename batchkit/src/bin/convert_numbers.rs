//! Convert integers to binary and hexadecimal.
//!
//! ```bash
//! convert_numbers data.txt
//! ```

use batchkit::cli::{fail, start, LogArgs, OutputArgs};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convert_numbers", version)]
#[command(about = "Convert integers to binary and hexadecimal", long_about = None)]
struct Cli {
    /// Input file, one integer per line
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = start(|cli: &Cli| &cli.log);

    if let Err(e) = batchkit::convert::run(&cli.input, &cli.output.to_config()) {
        fail(e);
    }
}
