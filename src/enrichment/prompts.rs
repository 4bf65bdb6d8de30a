//! Prompt templates for the live facility lookup.

use crate::models::{AppMode, Coordinate};

/// Review attached to every facility after a successful live refresh.
pub const VERIFIED_REVIEW_AUTHOR: &str = "Verified Assistant";
pub const VERIFIED_REVIEW_COMMENT: &str = "Details verified with real-time Google Maps grounding.";
pub const VERIFIED_REVIEW_DATE: &str = "Live";

/// Appended to each address once the live refresh succeeds.
pub const LIVE_ADDRESS_SUFFIX: &str = " (Live Map Update)";

pub fn facility_search_prompt(mode: AppMode, location: Coordinate) -> String {
    format!(
        "Find 10 high-quality {} in India near lat: {}, lng: {}. \
         Categorize them and note if they are directly on the main thoroughfare. \
         Include operating hours.",
        mode.search_subject(),
        location.lat,
        location.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_mode_subject_and_coordinates() {
        let prompt = facility_search_prompt(AppMode::BabyCare, Coordinate::new(12.5, 77.25));
        assert!(prompt.contains("baby care, feeding rooms, and diaper change areas"));
        assert!(prompt.contains("lat: 12.5, lng: 77.25"));
        assert!(prompt.contains("operating hours"));
    }
}
