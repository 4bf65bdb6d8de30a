use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::models::{Facility, FacilityType, TravelMode};
use crate::ranking::config::RankingConfig;

/// Category filter selected from the quick-access grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    OnTheWay,
    FeedingArea,
    DiaperChange,
    Kind(FacilityType),
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

impl Category {
    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::OnTheWay => "On the Way",
            Category::FeedingArea => "Feeding Area",
            Category::DiaperChange => "Diaper Change",
            Category::Kind(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Category::All),
            "On the Way" => Ok(Category::OnTheWay),
            "Feeding Area" => Ok(Category::FeedingArea),
            "Diaper Change" => Ok(Category::DiaperChange),
            other => other
                .parse::<FacilityType>()
                .map(Category::Kind)
                .map_err(|_| anyhow::anyhow!("unknown category: {other}")),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Case-insensitive substring match on name or address.
pub fn matches_search(facility: &Facility, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    facility.name.to_lowercase().contains(needle_lower)
        || facility.address.to_lowercase().contains(needle_lower)
}

pub fn matches_category(
    facility: &Facility,
    category: Category,
    travel_mode: TravelMode,
    config: &RankingConfig,
) -> bool {
    match category {
        Category::All => true,
        Category::Kind(kind) => facility.kind == kind,
        Category::FeedingArea => facility.has_feeding_area,
        Category::DiaperChange => facility.has_diaper_change,
        Category::OnTheWay => {
            let threshold = config.on_the_way_threshold(travel_mode);
            facility.is_roadside == Some(true)
                || facility
                    .diversion_distance
                    .map(|km| km <= threshold)
                    .unwrap_or(false)
        }
    }
}

pub fn matches_open(facility: &Facility, only_open: bool) -> bool {
    !only_open || facility.is_open
}
