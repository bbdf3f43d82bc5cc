//! Case-insensitive word frequencies.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::config::OutputConfig;
use crate::error::{RunError, RunResult};
use crate::parser::{extract_words, read_text};
use crate::report::{elapsed_line, write_results, ResultsKind, Stopwatch};

/// Word → occurrences, iterated in lexicographic order.
pub type WordFrequencies = BTreeMap<String, usize>;

pub fn count_words<I>(words: I) -> WordFrequencies
where
    I: IntoIterator<Item = String>,
{
    let mut frequencies = WordFrequencies::new();
    for word in words {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

/// Results text without the elapsed-time line.
pub fn render(frequencies: &WordFrequencies) -> String {
    let mut text = String::from("Word Count:\n");
    for (word, count) in frequencies {
        text.push_str(&format!("{word}: {count}\n"));
    }
    text
}

/// Read `input`, count its words, print and save the results.
pub fn run(input: &Path, output: &OutputConfig) -> RunResult<String> {
    let timer = Stopwatch::start();
    let content = read_text(input)?;
    let words = extract_words(&content);
    info!(words = words.len(), "Words read");

    if words.is_empty() {
        return Err(RunError::NoValidData("words"));
    }

    let frequencies = count_words(words);
    let mut text = render(&frequencies);
    text.push_str(&elapsed_line(timer.elapsed_secs()));
    text.push('\n');

    write_results(&text, ResultsKind::WordCount, input, output)?;
    Ok(text)
}
