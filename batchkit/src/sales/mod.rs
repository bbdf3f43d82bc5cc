//! Sales totals: join a price catalogue against a sales record.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::OutputConfig;
use crate::error::RunResult;
use crate::models::{PriceCatalogEntry, SaleRecord};
use crate::parser::read_json_array;
use crate::report::{elapsed_line, write_results, ResultsKind, Stopwatch};

/// Product title → unit price.
pub type PriceMap = HashMap<String, f64>;

/// Outcome of pricing a sales record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSummary {
    pub total: f64,
    /// One line per priced sale, in input order.
    pub details: Vec<String>,
    /// Products that had no catalogue price.
    pub unpriced: Vec<String>,
    /// Sales elements that could not be read as a sale.
    pub malformed: usize,
}

impl SalesSummary {
    /// Results text without the elapsed-time line.
    pub fn render(&self) -> String {
        format!(
            "Sales Summary:\n{}\n\nTotal sales: {:.2}\n",
            self.details.join("\n"),
            self.total
        )
    }
}

/// Reduce catalogue elements to a price map.
///
/// Elements without a title or a price are ignored; a repeated title keeps
/// the last price seen.
pub fn build_price_map(catalogue: &[Value]) -> PriceMap {
    let mut prices = PriceMap::new();
    for item in catalogue {
        let Ok(entry) = PriceCatalogEntry::deserialize(item) else {
            continue;
        };
        if let (Some(title), Some(price)) = (entry.title, entry.price) {
            if !title.is_empty() {
                prices.insert(title, price);
            }
        }
    }
    prices
}

/// Price every sale. Unknown products are warned and left out of the total.
pub fn compute_total(prices: &PriceMap, sales: &[Value]) -> SalesSummary {
    let mut summary = SalesSummary::default();

    for (idx, item) in sales.iter().enumerate() {
        let sale = match SaleRecord::deserialize(item) {
            Ok(sale) => sale,
            Err(e) => {
                warn!(index = idx, error = %e, "Sale record skipped");
                summary.malformed += 1;
                continue;
            }
        };

        let product = sale.product.unwrap_or_default();
        let Some(&price) = prices.get(&product) else {
            warn!(product = %product, "Product has no price in the catalogue");
            summary.unpriced.push(product);
            continue;
        };

        let cost = price * sale.quantity as f64;
        debug!(product = %product, quantity = sale.quantity, price, cost, "Sale priced");
        summary
            .details
            .push(format!("{product}: {} x {price:.2} = {cost:.2}", sale.quantity));
        summary.total += cost;
    }

    summary
}

/// Read both files, price the sales, print and save the results.
pub fn run(catalogue: &Path, sales: &Path, output: &OutputConfig) -> RunResult<String> {
    let timer = Stopwatch::start();
    let catalogue_items = read_json_array(catalogue)?;
    let sales_items = read_json_array(sales)?;

    let prices = build_price_map(&catalogue_items);
    info!(products = prices.len(), sales = sales_items.len(), "Inputs loaded");

    let summary = compute_total(&prices, &sales_items);
    let mut text = summary.render();
    text.push_str(&elapsed_line(timer.elapsed_secs()));
    text.push('\n');

    write_results(&text, ResultsKind::Sales, sales, output)?;
    Ok(text)
}
