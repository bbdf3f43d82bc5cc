//! Ingest `entity;field;...` lines into the hotel, customer and reservation stores.
//!
//! ```bash
//! hotel_manager input.txt
//! hotel_manager input.txt --store-dir data/
//! ```

use batchkit::cli::{fail, start, LogArgs};
use batchkit::hotel::process_file;
use batchkit::StoreConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hotel_manager", version)]
#[command(about = "Append hotels, customers and reservations from a text file to JSON stores", long_about = None)]
struct Cli {
    /// Input file, one `entity;field;...` record per line
    input: PathBuf,

    /// Directory holding hotels.json, customers.json and reservations.json
    /// (default: $BATCHKIT_STORE_DIR or the current directory)
    #[arg(long, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = start(|cli: &Cli| &cli.log);
    let config = StoreConfig::resolve(cli.store_dir.as_deref());

    match process_file(&cli.input, &config) {
        Ok(report) => print!("{}", report.render()),
        Err(e) => fail(e),
    }
}
