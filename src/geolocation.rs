use anyhow::{anyhow, Result};

use crate::config::parse_coordinate;
use crate::models::Coordinate;

const ENABLE_LOGS: bool = true;

/// A one-shot reading of the device position.
pub trait LocationSource {
    fn current_position(&self) -> Result<Coordinate>;
}

/// Reads `CAREWAY_LAT` / `CAREWAY_LNG`; stands in for the device sensor when
/// running headless.
pub struct EnvLocationSource;

impl LocationSource for EnvLocationSource {
    fn current_position(&self) -> Result<Coordinate> {
        let lat = std::env::var("CAREWAY_LAT").map_err(|_| anyhow!("CAREWAY_LAT not set"))?;
        let lng = std::env::var("CAREWAY_LNG").map_err(|_| anyhow!("CAREWAY_LNG not set"))?;
        parse_coordinate(&lat, &lng)
    }
}

/// A position handed over by the UI shell, or a denial.
pub struct ReportedLocation(pub Option<Coordinate>);

impl LocationSource for ReportedLocation {
    fn current_position(&self) -> Result<Coordinate> {
        self.0.ok_or_else(|| anyhow!("location permission denied"))
    }
}

/// Ask the source once; any failure falls back to `fallback`.
pub fn resolve_location(source: &dyn LocationSource, fallback: Coordinate) -> Coordinate {
    match source.current_position() {
        Ok(coord) => {
            crate::log_info!("[geolocation] device at {}, {}", coord.lat, coord.lng);
            coord
        }
        Err(err) => {
            crate::log_warn!(
                "[geolocation] {err}; using fallback {}, {}",
                fallback.lat,
                fallback.lng
            );
            fallback
        }
    }
}
