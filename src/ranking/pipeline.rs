use serde::{Deserialize, Serialize};

use crate::models::{Facility, SortOption, TravelMode};
use crate::ranking::{
    config::RankingConfig,
    filter::{matches_category, matches_open, matches_search, Category},
    scoring::smart_score,
};

const ENABLE_LOGS: bool = true;

/// Everything the pipeline reads from the browse state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub search: String,
    pub category: Category,
    pub travel_mode: TravelMode,
    pub sort: SortOption,
    pub only_open: bool,
}

/// Filter then sort. The output borrows from `facilities` and keeps the input
/// order among equal keys.
pub fn rank_facilities<'a>(
    facilities: &'a [Facility],
    query: &FilterQuery,
    config: &RankingConfig,
) -> Vec<&'a Facility> {
    let needle = query.search.to_lowercase();

    let mut ranked: Vec<&Facility> = facilities
        .iter()
        .filter(|f| {
            matches_search(f, &needle)
                && matches_category(f, query.category, query.travel_mode, config)
                && matches_open(f, query.only_open)
        })
        .collect();

    match query.sort {
        SortOption::Nearest => ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
        SortOption::TopRated => ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::SmartSuggest => {
            // One score per facility, not per comparison.
            let mut scored: Vec<(f64, &Facility)> = ranked
                .into_iter()
                .map(|f| (smart_score(f, config), f))
                .collect();
            scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
            ranked = scored.into_iter().map(|(_, f)| f).collect();
        }
    }

    crate::log_debug!(
        "[ranking] {} of {} facilities match {:?}",
        ranked.len(),
        facilities.len(),
        query
    );

    ranked
}
