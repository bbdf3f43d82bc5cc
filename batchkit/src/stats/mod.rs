//! Descriptive statistics over a list of numbers.
//!
//! All functions expect a non-empty slice; [`run`] rejects empty input
//! before any of them is called.

use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::config::OutputConfig;
use crate::error::{RunError, RunResult};
use crate::parser::{parse_numbers, read_text};
use crate::report::{elapsed_line, format_float, write_results, ResultsKind, Stopwatch};

/// Summary of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

impl Statistics {
    pub fn compute(numbers: &[f64]) -> Self {
        let mean = mean(numbers);
        let variance = variance(numbers, mean);
        Self {
            count: numbers.len(),
            mean,
            median: median(numbers),
            mode: mode(numbers),
            variance,
            std_dev: std_dev(variance),
        }
    }

    /// Results text without the elapsed-time line.
    pub fn render(&self) -> String {
        let mode = if self.mode.is_empty() {
            "No unique mode".to_string()
        } else {
            let values: Vec<String> = self.mode.iter().map(|v| format_float(*v)).collect();
            format!("[{}]", values.join(", "))
        };

        format!(
            "Descriptive Statistics:\n\
             Count: {}\n\
             Mean: {}\n\
             Median: {}\n\
             Mode: {}\n\
             Variance: {}\n\
             Standard Deviation: {}\n",
            self.count,
            format_float(self.mean),
            format_float(self.median),
            mode,
            format_float(self.variance),
            format_float(self.std_dev),
        )
    }
}

pub fn mean(numbers: &[f64]) -> f64 {
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

pub fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Values reaching the highest frequency, in order of first appearance.
///
/// Empty when every value would be modal, i.e. when the modal set is as
/// large as the input itself.
pub fn mode(numbers: &[f64]) -> Vec<f64> {
    // Keyed by bit pattern; -0.0 folds into 0.0 so equal values share a slot.
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut first_seen: Vec<f64> = Vec::new();
    for &n in numbers {
        let n = if n == 0.0 { 0.0 } else { n };
        let count = counts.entry(n.to_bits()).or_insert(0);
        if *count == 0 {
            first_seen.push(n);
        }
        *count += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    let modes: Vec<f64> = first_seen
        .into_iter()
        .filter(|v| counts[&v.to_bits()] == max)
        .collect();

    if modes.len() < numbers.len() {
        modes
    } else {
        Vec::new()
    }
}

/// Population variance (divides by `n`).
pub fn variance(numbers: &[f64], mean: f64) -> f64 {
    numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / numbers.len() as f64
}

pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}

/// Read `input`, compute the statistics, print and save the results.
pub fn run(input: &Path, output: &OutputConfig) -> RunResult<String> {
    let timer = Stopwatch::start();
    let content = read_text(input)?;
    let parsed = parse_numbers(&content);
    info!(
        accepted = parsed.values.len(),
        rejected = parsed.rejected.len(),
        "Numbers read"
    );

    if parsed.values.is_empty() {
        return Err(RunError::NoValidData("numbers"));
    }

    let stats = Statistics::compute(&parsed.values);
    let mut text = stats.render();
    text.push_str(&elapsed_line(timer.elapsed_secs()));
    text.push('\n');

    write_results(&text, ResultsKind::Statistics, input, output)?;
    Ok(text)
}
