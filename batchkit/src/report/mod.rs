//! Results text: timing, float formatting, output naming, and writing.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::config::OutputConfig;
use crate::error::{RunError, RunResult};

/// Wall-clock timer around a run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Final line of every results text.
pub fn elapsed_line(secs: f64) -> String {
    format!("Elapsed Time: {secs:.6} seconds")
}

/// Shortest round-trip form of a float, always with a fractional part (`3.0`, `2.5`).
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Which utility produced a results file. Decides the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsKind {
    Sales,
    Statistics,
    Conversion,
    WordCount,
}

impl ResultsKind {
    /// Results file name derived from the input file.
    pub fn file_name(&self, input: &Path) -> String {
        let stem = input_stem(input);
        match self {
            Self::Sales => format!("SalesResults_{stem}.txt"),
            Self::Statistics => format!("{stem}_estadisticas.txt"),
            Self::Conversion => format!("ConvertionResults_{stem}.txt"),
            Self::WordCount => format!("WordCountResults_{stem}.txt"),
        }
    }
}

/// File name without directories or the last extension.
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string())
}

/// Print the results text and save it under the output directory.
pub fn write_results(
    text: &str,
    kind: ResultsKind,
    input: &Path,
    output: &OutputConfig,
) -> RunResult<PathBuf> {
    println!("{text}");

    let path = output.dir.join(kind.file_name(input));
    fs::write(&path, text).map_err(|source| RunError::Output {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "Results saved");
    Ok(path)
}
