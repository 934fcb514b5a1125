/// Named forecast locations.
///
/// The registry is static configuration: a CSV fixture embedded at compile
/// time. The rest of the core treats coordinates as opaque parameters and
/// never consults the registry itself.
use crate::error::{RaincalError, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV data for all named locations.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/locations.csv");

/// A named site with its coordinates.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Get the location vector from the embedded CSV.
    pub fn get_location_vector() -> Vec<Location> {
        if let Ok(locations) = Location::parse_location_csv(CSV_OBJECT) {
            locations
        } else {
            panic!("failed to parse embedded locations csv")
        }
    }

    /// Look up a location by name, case-insensitively.
    pub fn find(name: &str) -> Result<Location> {
        let wanted = name.trim().to_lowercase();
        Location::get_location_vector()
            .into_iter()
            .find(|l| l.name.to_lowercase() == wanted)
            .ok_or_else(|| RaincalError::LocationNotFound(name.to_string()))
    }

    /// Parse a CSV string of location data.
    ///
    /// Expected CSV columns: name, latitude, longitude
    pub fn parse_location_csv(csv_object: &str) -> Result<Vec<Location>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let mut locations = Vec::new();
        for row in rdr.deserialize() {
            let location: Location = row?;
            locations.push(location);
        }
        Ok(locations)
    }
}
