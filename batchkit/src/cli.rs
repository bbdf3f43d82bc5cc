//! Command-line pieces shared by every binary.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use tracing::Level;

use crate::config::OutputConfig;
use crate::logging::{LogConfig, LogFormat};

/// Logging flags.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level (`RUST_LOG` overrides it).
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

impl LogArgs {
    pub fn to_config(&self) -> LogConfig {
        let level = match self.log_level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        LogConfig::default()
            .with_level(level)
            .with_format(format)
            .with_ansi(io::stderr().is_terminal())
    }
}

/// Where the results file goes.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory for the results file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl OutputArgs {
    pub fn to_config(&self) -> OutputConfig {
        OutputConfig::new(&self.output_dir)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parse arguments; usage errors exit with status 1, help and version with 0.
pub fn parse_args<P: Parser>() -> P {
    P::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}

/// Load `.env` (if present), parse arguments, and start logging.
pub fn start<P: Parser>(log: impl Fn(&P) -> &LogArgs) -> P {
    dotenvy::dotenv().ok();
    let cli = parse_args::<P>();
    crate::logging::init_logging(&log(&cli).to_config());
    cli
}

/// Print a fatal error and exit with status 1.
pub fn fail(error: impl Display) -> ! {
    eprintln!("❌ Error: {error}");
    std::process::exit(1);
}
