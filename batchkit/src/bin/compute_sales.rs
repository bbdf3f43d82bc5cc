//! Total a sales record against a price catalogue.
//!
//! ```bash
//! compute_sales priceCatalogue.json salesRecord.json
//! ```

use batchkit::cli::{fail, start, LogArgs, OutputArgs};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compute_sales", version)]
#[command(about = "Compute the total cost of a sales record", long_about = None)]
struct Cli {
    /// JSON array of products with `title` and `price`
    price_catalogue: PathBuf,

    /// JSON array of sales with `Product` and `Quantity`
    sales_record: PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli: Cli = start(|cli: &Cli| &cli.log);

    let output = cli.output.to_config();

    if let Err(e) = batchkit::sales::run(&cli.price_catalogue, &cli.sales_record, &output) {
        fail(e);
    }
}
