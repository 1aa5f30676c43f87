//! Airport reference data for the search form dropdowns.

use serde::Deserialize;

/// One selectable airport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Airport {
    /// IATA-style code shown as the option value (e.g. "JFK").
    pub code: String,
    /// Human-readable airport name.
    pub name: String,
}

/// The two dropdown lists from airports.json.
///
/// Only the search form consumes this; the saved-deals core never sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AirportCatalog {
    /// Airports offered as origins.
    #[serde(default)]
    pub origins: Vec<Airport>,
    /// Airports offered as destinations.
    #[serde(default)]
    pub destinations: Vec<Airport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_both_lists() {
        let json = r#"{
            "origins": [{"code": "JFK", "name": "John F. Kennedy International"}],
            "destinations": [
                {"code": "LAX", "name": "Los Angeles International"},
                {"code": "SFO", "name": "San Francisco International"}
            ]
        }"#;
        let catalog: AirportCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.origins.len(), 1);
        assert_eq!(catalog.destinations.len(), 2);
        assert_eq!(catalog.origins[0].code, "JFK");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let catalog: AirportCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.origins.is_empty());
        assert!(catalog.destinations.is_empty());
    }
}
