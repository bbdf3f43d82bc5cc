//! # batchkit - small batch record and number utilities
//!
//! Five independent command-line tools built from the same pipeline:
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  Reader  │───▶│ Validator │───▶│ Computer │───▶│ Formatter │───▶│  Writer  │
//! │ (parser) │    │(predicates│    │          │    │ (report)  │    │ (report) │
//! └──────────┘    └───────────┘    └──────────┘    └───────────┘    └──────────┘
//! ```
//!
//! | binary               | module      |
//! |----------------------|-------------|
//! | `hotel_manager`      | [`hotel`]   |
//! | `compute_sales`      | [`sales`]   |
//! | `compute_statistics` | [`stats`]   |
//! | `convert_numbers`    | [`convert`] |
//! | `word_count`         | [`words`]   |
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Ledger records and sales inputs
//! - [`validation`] - Accepted-input grammars
//! - [`parser`] - File readers and token filters
//! - [`store`] - Append-only JSON ledgers
//! - [`report`] - Timing, formatting and results files
//! - [`config`] - Store and output locations
//! - [`logging`] - `tracing` subscriber setup
//! - [`cli`] - Shared command-line flags

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Input
pub mod parser;
pub mod validation;

// Persistence and output
pub mod report;
pub mod store;

// Utilities
pub mod convert;
pub mod hotel;
pub mod sales;
pub mod stats;
pub mod words;

// Binaries support
pub mod cli;
pub mod logging;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{OutputConfig, StoreConfig};
pub use error::{InputError, RunError, RunResult, StoreError};
pub use models::{Customer, Hotel, PriceCatalogEntry, Reservation, SaleRecord};
pub use store::{create, JsonStore, MemoryStore, Repository};
