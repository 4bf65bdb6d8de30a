use crate::models::TravelMode;

/// Weights and thresholds used by the filter/sort pipeline.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Smart-suggest weights
    pub weight_rating: f64,
    pub weight_distance: f64,
    pub weight_diversion: f64,

    /// Diversion assumed for scoring when a facility has none (km)
    pub default_diversion_km: f64,

    /// "On the way" detour limits per travel mode (km)
    pub walk_threshold_km: f64,
    pub cycle_threshold_km: f64,
    pub motorized_threshold_km: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weight_rating: 0.4,
            weight_distance: 0.3,
            weight_diversion: 0.3,
            default_diversion_km: 5.0,
            walk_threshold_km: 0.2,
            cycle_threshold_km: 0.3,
            motorized_threshold_km: 0.6,
        }
    }
}

impl RankingConfig {
    pub fn on_the_way_threshold(&self, mode: TravelMode) -> f64 {
        if mode.is_motorized() {
            return self.motorized_threshold_km;
        }
        match mode {
            TravelMode::Cycle => self.cycle_threshold_km,
            _ => self.walk_threshold_km,
        }
    }
}
