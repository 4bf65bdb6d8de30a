use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppMode {
    Toilet,
    BabyCare,
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::Toilet
    }
}

impl AppMode {
    /// The kind of places the enrichment prompt asks for.
    pub fn search_subject(&self) -> &'static str {
        match self {
            AppMode::Toilet => "public toilets and restrooms",
            AppMode::BabyCare => "baby care, feeding rooms, and diaper change areas",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walk,
    Cycle,
    Motorbike,
    Car,
}

impl Default for TravelMode {
    fn default() -> Self {
        TravelMode::Walk
    }
}

impl TravelMode {
    pub fn is_motorized(&self) -> bool {
        matches!(self, TravelMode::Motorbike | TravelMode::Car)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    Nearest,
    TopRated,
    SmartSuggest,
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::SmartSuggest
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Map,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::List
    }
}
