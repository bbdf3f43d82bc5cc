//! Line-oriented ingestion of hotels, customers, and reservations.
//!
//! ```text
//! hotel;H001;Hotel Safi Inn;Lazaro 109;50
//! customer;C001;Manuel Palacios;manuel@example.com
//! reservation;R001;H001;C001
//! ```
//!
//! Every accepted line is written to its store before the next line is read.
//! A later failure never undoes earlier writes.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::RunResult;
use crate::models::{Customer, EntityKind, Hotel, Reservation};
use crate::parser::{read_text, Rejected};
use crate::store::{JsonStore, Repository};
use crate::validation::split_record_line;

/// Counts from one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub hotels: usize,
    pub customers: usize,
    pub reservations: usize,
    pub skipped: Vec<Rejected>,
}

impl IngestReport {
    pub fn created(&self) -> usize {
        self.hotels + self.customers + self.reservations
    }

    pub fn render(&self) -> String {
        format!(
            "Hotels created: {}\nCustomers created: {}\nReservations created: {}\nLines skipped: {}\n",
            self.hotels,
            self.customers,
            self.reservations,
            self.skipped.len()
        )
    }
}

/// A line that parsed into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Hotel(Hotel),
    Customer(Customer),
    Reservation(Reservation),
}

/// Why a line was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    /// Fewer than two `;`-separated fields.
    InvalidFormat,
    UnknownEntity(String),
    MissingFields { entity: EntityKind, found: usize },
    InvalidRoomCount(String),
}

impl std::fmt::Display for LineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid line format"),
            Self::UnknownEntity(entity) => write!(f, "unknown entity: {entity}"),
            Self::MissingFields { entity, found } => write!(
                f,
                "{} needs {} fields, found {found}",
                entity.as_str(),
                entity.field_count()
            ),
            Self::InvalidRoomCount(value) => write!(f, "total rooms is not an integer: {value}"),
        }
    }
}

/// Parse one ingestion line.
pub fn parse_line(line: &str) -> Result<Entry, LineIssue> {
    let fields = split_record_line(line).ok_or(LineIssue::InvalidFormat)?;

    let entity = EntityKind::from_keyword(fields[0])
        .ok_or_else(|| LineIssue::UnknownEntity(fields[0].to_lowercase()))?;
    if fields.len() < entity.field_count() {
        return Err(LineIssue::MissingFields {
            entity,
            found: fields.len(),
        });
    }

    let entry = match entity {
        EntityKind::Hotel => {
            let rooms = fields[4].trim();
            let total_rooms = rooms
                .parse()
                .map_err(|_| LineIssue::InvalidRoomCount(rooms.to_string()))?;
            Entry::Hotel(Hotel {
                id: fields[1].to_string(),
                name: fields[2].to_string(),
                address: fields[3].to_string(),
                total_rooms,
            })
        }
        EntityKind::Customer => Entry::Customer(Customer {
            id: fields[1].to_string(),
            name: fields[2].to_string(),
            email: fields[3].to_string(),
        }),
        EntityKind::Reservation => Entry::Reservation(Reservation {
            id: fields[1].to_string(),
            hotel_id: fields[2].to_string(),
            customer_id: fields[3].to_string(),
        }),
    };
    Ok(entry)
}

/// Dispatches parsed lines to one repository per entity type.
pub struct HotelManager<'a> {
    hotels: &'a dyn Repository<Hotel>,
    customers: &'a dyn Repository<Customer>,
    reservations: &'a dyn Repository<Reservation>,
}

impl<'a> HotelManager<'a> {
    pub fn new(
        hotels: &'a dyn Repository<Hotel>,
        customers: &'a dyn Repository<Customer>,
        reservations: &'a dyn Repository<Reservation>,
    ) -> Self {
        Self {
            hotels,
            customers,
            reservations,
        }
    }

    /// Ingest every line of `content`.
    ///
    /// Bad lines are skipped with a warning. A store failure stops the run;
    /// records already written stay written.
    pub fn process_content(&self, content: &str) -> RunResult<IngestReport> {
        let mut report = IngestReport::default();

        for (idx, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(entry) => self.store(entry, &mut report)?,
                Err(issue) => {
                    warn!(line = idx + 1, content = line.trim(), "Line skipped: {issue}");
                    report.skipped.push(Rejected {
                        line: idx + 1,
                        value: line.trim().to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    fn store(&self, entry: Entry, report: &mut IngestReport) -> RunResult<()> {
        match entry {
            Entry::Hotel(hotel) => {
                debug!(id = %hotel.id, "Creating hotel");
                self.hotels.append(hotel)?;
                report.hotels += 1;
            }
            Entry::Customer(customer) => {
                debug!(id = %customer.id, "Creating customer");
                self.customers.append(customer)?;
                report.customers += 1;
            }
            Entry::Reservation(reservation) => {
                debug!(id = %reservation.id, "Creating reservation");
                self.reservations.append(reservation)?;
                report.reservations += 1;
            }
        }
        Ok(())
    }
}

/// Ingest `input` into the JSON stores named by `config`.
pub fn process_file(input: &Path, config: &StoreConfig) -> RunResult<IngestReport> {
    let content = read_text(input)?;

    let hotels: JsonStore<Hotel> = JsonStore::new(&config.hotels);
    let customers: JsonStore<Customer> = JsonStore::new(&config.customers);
    let reservations: JsonStore<Reservation> = JsonStore::new(&config.reservations);
    debug!(hotels = %hotels.path().display(), "Using stores");
    let manager = HotelManager::new(&hotels, &customers, &reservations);

    let report = manager.process_content(&content)?;
    info!(
        created = report.created(),
        skipped = report.skipped.len(),
        "Ingestion finished"
    );
    Ok(report)
}
