use crate::models::{Facility, TravelMode};

/// Rough minutes per km for each travel mode.
fn minutes_per_km(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Walk => 12.0,
        TravelMode::Cycle => 4.0,
        TravelMode::Motorbike => 2.0,
        TravelMode::Car => 2.5,
    }
}

pub fn travel_minutes(distance_km: f64, mode: TravelMode) -> u32 {
    (distance_km.max(0.0) * minutes_per_km(mode)).round() as u32
}

pub fn facility_travel_minutes(facility: &Facility, mode: TravelMode) -> u32 {
    travel_minutes(facility.distance, mode)
}
