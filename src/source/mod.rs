//! Static data sources: the ticket catalog and the airport lists.
//!
//! Both files are read once at startup; there is no refresh and no watch.
//! Parsing happens at the boundary: callers get typed collections, never
//! raw JSON. Load failures are typed ([`DataError`]) so the composition
//! root can log them and continue with empty data (the UI then shows its
//! empty states).

use crate::model::{AirportCatalog, DataError, Ticket};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Top-level shape of tickets.json.
#[derive(Debug, Deserialize)]
struct TicketFile {
    #[serde(default)]
    tickets: Vec<Ticket>,
}

fn read_to_string(path: &Path) -> Result<String, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the ticket catalog from a tickets.json document.
///
/// The document holds the array under a top-level `tickets` field.
///
/// # Errors
///
/// Returns [`DataError::FileNotFound`] when the path does not exist,
/// [`DataError::Io`] for read failures, and [`DataError::Parse`] for
/// malformed JSON.
pub fn load_tickets(path: &Path) -> Result<Vec<Ticket>, DataError> {
    let raw = read_to_string(path)?;
    let file: TicketFile = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = file.tickets.len(), "Loaded ticket catalog");
    Ok(file.tickets)
}

/// Load the airport dropdown lists from an airports.json document.
///
/// # Errors
///
/// Same failure modes as [`load_tickets`].
pub fn load_airports(path: &Path) -> Result<AirportCatalog, DataError> {
    let raw = read_to_string(path)?;
    let catalog: AirportCatalog =
        serde_json::from_str(&raw).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        origins = catalog.origins.len(),
        destinations = catalog.destinations.len(),
        "Loaded airport catalog"
    );
    Ok(catalog)
}

/// Load the catalog, trading failures for empty collections.
///
/// This mirrors the fire-and-forget startup fetch: either file failing is
/// logged and leaves its collection empty, so the views render "No deals
/// found" instead of the app exiting.
pub fn load_or_empty(tickets_path: &Path, airports_path: &Path) -> (Vec<Ticket>, AirportCatalog) {
    let tickets = match load_tickets(tickets_path) {
        Ok(tickets) => tickets,
        Err(err) => {
            warn!(error = %err, "Failed to fetch tickets; starting with an empty catalog");
            Vec::new()
        }
    };
    let airports = match load_airports(airports_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(error = %err, "Error loading airports; dropdowns will be empty");
            AirportCatalog::default()
        }
    };
    (tickets, airports)
}
