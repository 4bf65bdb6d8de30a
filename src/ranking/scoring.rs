use crate::models::Facility;
use crate::ranking::config::RankingConfig;

/// Smart-suggest score: weighted blend of rating, proximity and route diversion.
/// Each factor is normalised into (0, 1]; higher is better.
pub fn smart_score(facility: &Facility, config: &RankingConfig) -> f64 {
    let diversion = facility
        .diversion_distance
        .unwrap_or(config.default_diversion_km);

    config.weight_rating * score_rating(facility.rating)
        + config.weight_distance * score_proximity(facility.distance)
        + config.weight_diversion * score_proximity(diversion)
}

fn score_rating(rating: f64) -> f64 {
    rating / 5.0
}

/// 1 / (1 + km): 0 km scores 1.0, 1 km scores 0.5.
fn score_proximity(km: f64) -> f64 {
    1.0 / (1.0 + km)
}
