use serde::Serialize;

use crate::{
    enrichment::{EnrichmentBackend, RefreshOutcome},
    geolocation::{resolve_location, LocationSource},
    map_view::PinPosition,
    models::{AppMode, Coordinate, Facility, SortOption, TravelMode, ViewMode},
    ranking::{rank_facilities, Category},
    travel::facility_travel_minutes,
    AppState,
};

use super::{quick_categories, BrowseState, QuickCategory};

/// A list row: the facility plus the figures the card shows next to it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityCard {
    #[serde(flatten)]
    pub facility: Facility,
    pub travel_minutes: u32,
    pub is_commercial: bool,
    pub is_open_around_the_clock: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPinView {
    pub facility_id: String,
    pub name: String,
    pub distance: f64,
    pub position: PinPosition,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateResult {
    pub location: Coordinate,
    pub refresh: RefreshOutcome,
}

pub async fn get_browse_state<B>(state: &AppState<B>) -> BrowseState {
    state.browse.lock().await.clone()
}

pub async fn set_search<B>(state: &AppState<B>, query: String) {
    state.browse.lock().await.search = query;
}

pub async fn set_category<B>(state: &AppState<B>, category_id: String) -> Result<Category, String> {
    let category: Category = category_id.parse().map_err(|e: anyhow::Error| e.to_string())?;
    state.browse.lock().await.category = category;
    Ok(category)
}

pub async fn set_travel_mode<B>(state: &AppState<B>, mode: TravelMode) {
    state.browse.lock().await.travel_mode = mode;
}

pub async fn set_sort_option<B>(state: &AppState<B>, sort: SortOption) {
    state.browse.lock().await.sort = sort;
}

pub async fn set_view_mode<B>(state: &AppState<B>, view: ViewMode) {
    state.browse.lock().await.view_mode = view;
}

pub async fn toggle_only_open<B>(state: &AppState<B>) -> bool {
    state.browse.lock().await.toggle_only_open()
}

pub async fn get_quick_categories<B>(state: &AppState<B>) -> Vec<QuickCategory> {
    let mode = state.browse.lock().await.app_mode;
    quick_categories(mode).to_vec()
}

/// The ranked list for the current browse state.
pub async fn list_facilities<B>(state: &AppState<B>) -> Vec<FacilityCard> {
    let browse = state.browse.lock().await.clone();
    let facilities = state.store.read();

    rank_facilities(&facilities, &browse.query(), &state.config.ranking)
        .into_iter()
        .map(|f| FacilityCard {
            facility: f.clone(),
            travel_minutes: facility_travel_minutes(f, browse.travel_mode),
            is_commercial: f.is_commercial(),
            is_open_around_the_clock: f.is_open_around_the_clock(),
        })
        .collect()
}

/// Pins for the ranked list, active pin last.
pub async fn get_map_pins<B>(state: &AppState<B>) -> Vec<MapPinView> {
    let browse = state.browse.lock().await.clone();
    let facilities = state.store.read();
    let ranked = rank_facilities(&facilities, &browse.query(), &state.config.ranking);

    browse
        .map
        .layout(&ranked)
        .into_iter()
        .map(|pin| MapPinView {
            facility_id: pin.facility.id.clone(),
            name: pin.facility.name.clone(),
            distance: pin.facility.distance,
            position: pin.position,
            active: pin.active,
        })
        .collect()
}

pub async fn toggle_map_marker<B>(
    state: &AppState<B>,
    facility_id: String,
) -> Result<Option<String>, String> {
    if state.store.find(&facility_id).is_none() {
        return Err(format!("unknown facility {facility_id}"));
    }
    let mut browse = state.browse.lock().await;
    browse.map.toggle(&facility_id);
    Ok(browse.map.active().map(str::to_string))
}

pub async fn is_loading<B: EnrichmentBackend>(state: &AppState<B>) -> bool {
    state.enrichment.is_loading()
}

/// Resolve the device position once and run the first live refresh.
pub async fn locate_and_refresh<B: EnrichmentBackend>(
    state: &AppState<B>,
    source: &(dyn LocationSource + Sync),
) -> LocateResult {
    let location = resolve_location(source, state.config.fallback_location);
    *state.location.lock().await = Some(location);

    let mode = state.browse.lock().await.app_mode;
    let refresh = state.enrichment.refresh(mode, location).await;
    LocateResult { location, refresh }
}

/// Switch app mode. A real mode change re-runs the live refresh when the
/// location is already known.
pub async fn set_app_mode<B: EnrichmentBackend>(
    state: &AppState<B>,
    mode: AppMode,
) -> Option<RefreshOutcome> {
    let changed = state.browse.lock().await.set_app_mode(mode);
    if !changed {
        return None;
    }

    let location = *state.location.lock().await;
    match location {
        Some(location) => Some(state.enrichment.refresh(mode, location).await),
        None => None,
    }
}
