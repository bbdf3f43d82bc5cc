//! Domain records handled by the utilities.
//!
//! - [`Hotel`], [`Customer`], [`Reservation`] - ledger records written by `hotel_manager`
//! - [`PriceCatalogEntry`], [`SaleRecord`] - JSON inputs of `compute_sales`

use serde::{Deserialize, Serialize};

// =============================================================================
// Ledger Records
// =============================================================================

/// A hotel as stored in `hotels.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotel {
    #[serde(alias = "hotel_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub total_rooms: i64,
}

/// A customer as stored in `customers.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(alias = "customer_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A reservation as stored in `reservations.json`.
///
/// `hotel_id` and `customer_id` are not checked against the other stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    #[serde(alias = "reservation_id")]
    pub id: String,
    pub hotel_id: String,
    pub customer_id: String,
}

/// Kind of record named by the first field of an ingestion line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hotel,
    Customer,
    Reservation,
}

impl EntityKind {
    /// Parse the entity keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "hotel" => Some(Self::Hotel),
            "customer" => Some(Self::Customer),
            "reservation" => Some(Self::Reservation),
            _ => None,
        }
    }

    /// Number of `;`-separated fields a line of this kind needs, keyword included.
    pub fn field_count(&self) -> usize {
        match self {
            Self::Hotel => 5,
            Self::Customer | Self::Reservation => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Customer => "customer",
            Self::Reservation => "reservation",
        }
    }
}

// =============================================================================
// Sales Inputs
// =============================================================================

/// One element of the price catalogue. Only `title` and `price` are read.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PriceCatalogEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// One element of the sales record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SaleRecord {
    #[serde(rename = "Product", default)]
    pub product: Option<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: i64,
}
