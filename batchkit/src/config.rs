//! Where stores and results files live.

use std::path::{Path, PathBuf};

/// Environment variable naming the directory for the ledger stores.
pub const STORE_DIR_ENV: &str = "BATCHKIT_STORE_DIR";

pub const HOTELS_FILE: &str = "hotels.json";
pub const CUSTOMERS_FILE: &str = "customers.json";
pub const RESERVATIONS_FILE: &str = "reservations.json";

/// Paths of the three ledger stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub hotels: PathBuf,
    pub customers: PathBuf,
    pub reservations: PathBuf,
}

impl StoreConfig {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            hotels: dir.join(HOTELS_FILE),
            customers: dir.join(CUSTOMERS_FILE),
            reservations: dir.join(RESERVATIONS_FILE),
        }
    }

    /// Resolve the store directory: explicit flag, then [`STORE_DIR_ENV`], then the working directory.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(dir) = explicit {
            return Self::in_dir(dir);
        }
        match std::env::var_os(STORE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::in_dir(PathBuf::from(dir)),
            _ => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Directory where results files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl OutputConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
