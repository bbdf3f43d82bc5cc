//! Error types for the batch utilities.
//!
//! - [`InputError`] - reading and decoding input files
//! - [`StoreError`] - JSON ledger load/save failures
//! - [`RunError`] - top-level, run-terminating errors
//!
//! Record-level problems (a bad line, an unknown product) are not errors:
//! they are logged and skipped by the reader that finds them.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while loading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file does not exist.
    #[error("The file {} was not found", .0.display())]
    NotFound(PathBuf),

    /// Any other failure reading the file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("The file {} does not contain valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("The file {} must contain a JSON array", .0.display())]
    NotAnArray(PathBuf),
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors from a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but is not a JSON array of the expected records.
    #[error("Malformed store {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the store file failed.
    #[error("Store IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be serialized.
    #[error("Store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Run Errors (top-level)
// =============================================================================

/// Fatal errors that end a utility run with exit code 1.
#[derive(Debug, Error)]
pub enum RunError {
    /// Input could not be read.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Every input record was rejected.
    #[error("No valid {0} found in the input")]
    NoValidData(&'static str),

    /// The results file could not be written.
    #[error("Failed to write results to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for a whole utility run.
pub type RunResult<T> = Result<T, RunError>;
