use serde::Serialize;

use crate::models::Facility;

/// Pin placement on the simulated map, in percent of the map area.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PinPosition {
    pub x: u32,
    pub y: u32,
}

/// Pseudo-position derived from the numeric facility id; non-numeric ids pin
/// to the top-left corner of the grid.
pub fn pin_position(facility_id: &str) -> PinPosition {
    match facility_id.trim().parse::<u64>() {
        Ok(n) => PinPosition {
            x: 20 + (((n % 60) * 23) % 60) as u32,
            y: 20 + (((n % 60) * 17) % 60) as u32,
        },
        Err(_) => PinPosition { x: 20, y: 20 },
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPin<'a> {
    pub facility: &'a Facility,
    pub position: PinPosition,
    pub active: bool,
}

/// Which pin is currently expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSelection {
    active: Option<String>,
}

impl MapSelection {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Tapping the active pin collapses it; tapping another moves the selection.
    pub fn toggle(&mut self, facility_id: &str) {
        if self.active.as_deref() == Some(facility_id) {
            self.active = None;
        } else {
            self.active = Some(facility_id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Pins in draw order; the active one is drawn last so it sits on top.
    pub fn layout<'a>(&self, facilities: &[&'a Facility]) -> Vec<MapPin<'a>> {
        let mut pins: Vec<MapPin<'a>> = facilities
            .iter()
            .map(|f| MapPin {
                facility: f,
                position: pin_position(&f.id),
                active: self.active.as_deref() == Some(f.id.as_str()),
            })
            .collect();
        pins.sort_by_key(|pin| pin.active);
        pins
    }
}
