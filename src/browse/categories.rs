use serde::Serialize;

use crate::models::{AppMode, FacilityType};
use crate::ranking::Category;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct QuickCategory {
    pub id: Category,
    pub label: &'static str,
}

const fn quick(id: Category, label: &'static str) -> QuickCategory {
    QuickCategory { id, label }
}

const TOILET_CATEGORIES: [QuickCategory; 8] = [
    quick(Category::All, "Near Me"),
    quick(Category::OnTheWay, "On Route"),
    quick(Category::Kind(FacilityType::PetrolBunk), "Fuel/Gas"),
    quick(Category::Kind(FacilityType::Mall), "Malls"),
    quick(Category::Kind(FacilityType::Park), "Parks"),
    quick(Category::Kind(FacilityType::PublicPayAndUse), "Public"),
    quick(Category::Kind(FacilityType::Hotel), "Hotels"),
    quick(Category::Kind(FacilityType::Airport), "Airports"),
];

const BABY_CARE_CATEGORIES: [QuickCategory; 7] = [
    quick(Category::All, "All Care"),
    quick(Category::FeedingArea, "Feeding"),
    quick(Category::DiaperChange, "Diaper"),
    quick(Category::Kind(FacilityType::Mall), "Malls"),
    quick(Category::Kind(FacilityType::Airport), "Airports"),
    quick(Category::Kind(FacilityType::Park), "Parks"),
    quick(Category::Kind(FacilityType::Hotel), "Hotels"),
];

/// The quick-access grid offered for a mode, in display order.
pub fn quick_categories(mode: AppMode) -> &'static [QuickCategory] {
    match mode {
        AppMode::Toilet => &TOILET_CATEGORIES,
        AppMode::BabyCare => &BABY_CARE_CATEGORIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_modes_start_with_all() {
        for mode in [AppMode::Toilet, AppMode::BabyCare] {
            assert_eq!(quick_categories(mode)[0].id, Category::All);
        }
    }

    #[test]
    fn on_route_is_toilet_only() {
        let has_on_route =
            |mode| quick_categories(mode).iter().any(|q| q.id == Category::OnTheWay);
        assert!(has_on_route(AppMode::Toilet));
        assert!(!has_on_route(AppMode::BabyCare));
    }
}
