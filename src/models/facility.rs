use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::review::Review;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FacilityType {
    Mall,
    #[serde(rename = "Petrol Bunk")]
    PetrolBunk,
    #[serde(rename = "Highway Service")]
    HighwayService,
    #[serde(rename = "Public Pay & Use")]
    PublicPayAndUse,
    Retail,
    Hotel,
    Restaurant,
    #[serde(rename = "Coffee Shop")]
    CoffeeShop,
    Airport,
    #[serde(rename = "Train Station")]
    TrainStation,
    Eatery,
    Park,
}

impl FacilityType {
    pub const ALL: [FacilityType; 12] = [
        FacilityType::Mall,
        FacilityType::PetrolBunk,
        FacilityType::HighwayService,
        FacilityType::PublicPayAndUse,
        FacilityType::Retail,
        FacilityType::Hotel,
        FacilityType::Restaurant,
        FacilityType::CoffeeShop,
        FacilityType::Airport,
        FacilityType::TrainStation,
        FacilityType::Eatery,
        FacilityType::Park,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::Mall => "Mall",
            FacilityType::PetrolBunk => "Petrol Bunk",
            FacilityType::HighwayService => "Highway Service",
            FacilityType::PublicPayAndUse => "Public Pay & Use",
            FacilityType::Retail => "Retail",
            FacilityType::Hotel => "Hotel",
            FacilityType::Restaurant => "Restaurant",
            FacilityType::CoffeeShop => "Coffee Shop",
            FacilityType::Airport => "Airport",
            FacilityType::TrainStation => "Train Station",
            FacilityType::Eatery => "Eatery",
            FacilityType::Park => "Park",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FacilityType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown facility type: {s}"))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToiletStyle {
    Indian,
    Western,
    #[serde(rename = "Indian and Western")]
    IndianAndWestern,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// What the detail overlay shows about the detour to reach a facility.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RouteInsight {
    OnMainRoad,
    Detour { km: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FacilityType,
    pub address: String,
    /// Kilometres from the user.
    pub distance: f64,
    pub rating: f64,
    pub cleanliness_rating: f64,
    pub is_open: bool,
    pub is_free: bool,
    pub has_wheelchair_access: bool,
    pub has_stroller_access: bool,
    pub has_diaper_change: bool,
    pub has_feeding_area: bool,
    pub image_url: String,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toilet_style: Option<ToiletStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    /// Sits directly on the main thoroughfare.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_roadside: Option<bool>,
    /// Kilometres off the main route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversion_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
}

impl Facility {
    pub fn is_commercial(&self) -> bool {
        matches!(
            self.kind,
            FacilityType::Restaurant
                | FacilityType::Hotel
                | FacilityType::CoffeeShop
                | FacilityType::Retail
                | FacilityType::Eatery
        )
    }

    pub fn is_food_service(&self) -> bool {
        matches!(
            self.kind,
            FacilityType::Restaurant | FacilityType::Eatery | FacilityType::CoffeeShop
        )
    }

    pub fn is_open_around_the_clock(&self) -> bool {
        self.open_time
            .as_deref()
            .map(|t| t.to_lowercase().contains("24/7"))
            .unwrap_or(false)
    }

    pub fn is_highly_clean(&self) -> bool {
        self.cleanliness_rating >= 4.0
    }

    pub fn price_label(&self) -> &'static str {
        if self.is_free {
            "Free"
        } else if self.is_food_service() {
            "Cust."
        } else {
            "₹5-10"
        }
    }

    pub fn route_insight(&self) -> Option<RouteInsight> {
        self.diversion_distance.map(|km| {
            if km == 0.0 {
                RouteInsight::OnMainRoad
            } else {
                RouteInsight::Detour { km }
            }
        })
    }

    pub fn reviews(&self) -> &[Review] {
        self.reviews.as_deref().unwrap_or(&[])
    }

    /// Checks the per-record invariants: ratings in [0,5], review ratings in
    /// [1,5], distances non-negative.
    pub fn validate(&self) -> anyhow::Result<()> {
        let in_rating_range = |v: f64| (0.0..=5.0).contains(&v);

        if !in_rating_range(self.rating) {
            anyhow::bail!("facility {} has rating {} outside [0,5]", self.id, self.rating);
        }
        if !in_rating_range(self.cleanliness_rating) {
            anyhow::bail!(
                "facility {} has cleanliness rating {} outside [0,5]",
                self.id,
                self.cleanliness_rating
            );
        }
        if let Some(review) = self.reviews().iter().find(|r| !(1..=5).contains(&r.rating)) {
            anyhow::bail!(
                "facility {} has review {} rated {} outside [1,5]",
                self.id,
                review.id,
                review.rating
            );
        }
        if !(self.distance >= 0.0) {
            anyhow::bail!("facility {} has negative distance {}", self.id, self.distance);
        }
        if let Some(diversion) = self.diversion_distance {
            if !(diversion >= 0.0) {
                anyhow::bail!(
                    "facility {} has negative diversion distance {}",
                    self.id,
                    diversion
                );
            }
        }
        Ok(())
    }
}
