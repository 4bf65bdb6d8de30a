//! Outbound links into the external maps application.

use crate::models::{Coordinate, Facility};

const MAPS_BASE: &str = "https://www.google.com/maps";

/// Turn-by-turn directions to a coordinate.
pub fn directions_url(destination: Coordinate) -> String {
    format!(
        "{MAPS_BASE}/dir/?api=1&destination={},{}",
        destination.lat, destination.lng
    )
}

/// Place search by name and address, used for the "verified on maps" link.
pub fn search_url(name: &str, address: &str) -> String {
    let query = format!("{name} {address}");
    format!("{MAPS_BASE}/search/?api=1&query={}", urlencoding::encode(&query))
}

pub fn facility_directions_url(facility: &Facility) -> String {
    directions_url(facility.location)
}

pub fn facility_search_url(facility: &Facility) -> String {
    search_url(&facility.name, &facility.address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_use_raw_coordinates() {
        assert_eq!(
            directions_url(Coordinate::new(12.9716, 77.5946)),
            "https://www.google.com/maps/dir/?api=1&destination=12.9716,77.5946"
        );
    }

    #[test]
    fn search_query_is_percent_encoded() {
        assert_eq!(
            search_url("Sulabh Complex", "MG Road & Exit B"),
            "https://www.google.com/maps/search/?api=1&query=Sulabh%20Complex%20MG%20Road%20%26%20Exit%20B"
        );
    }
}
