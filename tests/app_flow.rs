//! End-to-end command flows against a scripted enrichment backend.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use anyhow::{anyhow, Result};
use careway_lib::{
    browse::commands as browse_cmd,
    config::{AppConfig, FALLBACK_LOCATION},
    detail::{commands as detail_cmd, ReportCategory},
    enrichment::{EnrichmentBackend, RefreshOutcome},
    geolocation::ReportedLocation,
    models::{AppMode, Coordinate, SortOption, TravelMode},
    AppState,
};

/// Succeeds or fails on demand and records every prompt it was given.
#[derive(Clone, Default)]
struct ScriptedBackend {
    fail: bool,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBackend {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl EnrichmentBackend for ScriptedBackend {
    async fn lookup(&self, prompt: &str, _location: Coordinate) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            Err(anyhow!("service unavailable"))
        } else {
            Ok(())
        }
    }
}

fn state_with(backend: ScriptedBackend) -> AppState<ScriptedBackend> {
    AppState::new(AppConfig::default(), backend)
}

#[tokio::test]
async fn successful_refresh_replaces_list_with_verified_data() {
    let backend = ScriptedBackend::default();
    let state = state_with(backend.clone());
    let here = Coordinate::new(12.93, 77.62);

    let located = browse_cmd::locate_and_refresh(&state, &ReportedLocation(Some(here))).await;

    assert_eq!(located.location, here);
    assert_eq!(located.refresh, RefreshOutcome::Refreshed { count: 10 });
    assert!(!browse_cmd::is_loading(&state).await);

    let facilities = state.store().snapshot();
    assert!(facilities
        .iter()
        .all(|f| f.address.ends_with(" (Live Map Update)")));
    assert!(facilities.iter().all(|f| f
        .reviews()
        .last()
        .map(|r| r.user_name == "Verified Assistant")
        .unwrap_or(false)));

    let prompts = backend.prompts.lock().unwrap();
    assert!(prompts[0].contains("public toilets and restrooms"));
    assert!(prompts[0].contains("lat: 12.93, lng: 77.62"));
}

#[tokio::test]
async fn failed_refresh_keeps_previous_list() {
    let state = state_with(ScriptedBackend::failing());
    let before = state.store().snapshot();

    let located = browse_cmd::locate_and_refresh(&state, &ReportedLocation(None)).await;

    assert_eq!(located.location, FALLBACK_LOCATION);
    assert!(matches!(located.refresh, RefreshOutcome::Failed { .. }));
    assert!(!browse_cmd::is_loading(&state).await);
    assert_eq!(state.store().snapshot(), before);
}

#[tokio::test]
async fn mode_change_resets_category_and_refreshes_once_located() {
    let backend = ScriptedBackend::default();
    let state = state_with(backend.clone());

    // Not located yet: no lookup.
    browse_cmd::set_category(&state, "Mall".into()).await.unwrap();
    assert!(browse_cmd::set_app_mode(&state, AppMode::BabyCare).await.is_none());
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    assert_eq!(browse_cmd::get_browse_state(&state).await.category.id(), "All");

    browse_cmd::locate_and_refresh(&state, &ReportedLocation(None)).await;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

    // Same mode again: nothing to do.
    assert!(browse_cmd::set_app_mode(&state, AppMode::BabyCare).await.is_none());

    let outcome = browse_cmd::set_app_mode(&state, AppMode::Toilet).await;
    assert!(matches!(outcome, Some(RefreshOutcome::Refreshed { .. })));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn browse_filters_flow_into_the_list() {
    let state = state_with(ScriptedBackend::default());

    browse_cmd::set_sort_option(&state, SortOption::Nearest).await;
    let cards = browse_cmd::list_facilities(&state).await;
    assert_eq!(cards.len(), 10);
    assert!(cards
        .windows(2)
        .all(|w| w[0].facility.distance <= w[1].facility.distance));

    browse_cmd::set_category(&state, "On the Way".into()).await.unwrap();
    browse_cmd::set_travel_mode(&state, TravelMode::Walk).await;
    let on_route: Vec<String> = browse_cmd::list_facilities(&state)
        .await
        .into_iter()
        .map(|c| c.facility.id)
        .collect();
    assert_eq!(on_route, vec!["3", "2", "8"]);

    assert!(browse_cmd::toggle_only_open(&state).await);
    browse_cmd::set_category(&state, "All".into()).await.unwrap();
    browse_cmd::set_search(&state, "PARK".into()).await;
    assert!(browse_cmd::list_facilities(&state).await.is_empty());

    assert!(browse_cmd::set_category(&state, "Near Me".into()).await.is_err());
}

#[tokio::test]
async fn cards_carry_travel_minutes_for_mode() {
    let state = state_with(ScriptedBackend::default());
    browse_cmd::set_travel_mode(&state, TravelMode::Cycle).await;
    browse_cmd::set_search(&state, "Phoenix".into()).await;

    let cards = browse_cmd::list_facilities(&state).await;
    assert_eq!(cards.len(), 1);
    // 1.2 km at 4 min/km
    assert_eq!(cards[0].travel_minutes, 5);
}

#[tokio::test]
async fn map_pins_follow_selection() {
    let state = state_with(ScriptedBackend::default());

    let active = browse_cmd::toggle_map_marker(&state, "5".into()).await.unwrap();
    assert_eq!(active.as_deref(), Some("5"));

    let pins = browse_cmd::get_map_pins(&state).await;
    let last = pins.last().unwrap();
    assert_eq!(last.facility_id, "5");
    assert!(last.active);
    assert_eq!(pins.iter().filter(|p| p.active).count(), 1);

    assert!(browse_cmd::toggle_map_marker(&state, "nope".into()).await.is_err());
}

#[tokio::test]
async fn review_posting_is_local_to_the_overlay() {
    let state = state_with(ScriptedBackend::default());

    let detail = detail_cmd::open_facility(&state, "1".into()).await.unwrap();
    assert_eq!(detail.reviews.len(), 2);
    assert_eq!(
        detail.directions_url,
        "https://www.google.com/maps/dir/?api=1&destination=12.9975,77.6966"
    );
    assert!(detail.recently_cleaned);

    // Incomplete drafts do nothing.
    detail_cmd::set_review_text(&state, "Lovely".into()).await.unwrap();
    assert_eq!(detail_cmd::post_review(&state).await.unwrap(), None);
    assert!(detail_cmd::set_review_rating(&state, 9).await.is_err());

    detail_cmd::set_review_rating(&state, 4).await.unwrap();
    let posted = detail_cmd::post_review(&state).await.unwrap().unwrap();
    assert_eq!(posted.comment, "Lovely");

    let detail = detail_cmd::get_facility_detail(&state).await.unwrap();
    assert_eq!(detail.reviews.len(), 3);
    assert_eq!(detail.reviews[0], posted);
    assert_eq!(detail.draft_rating, 0);
    assert!(detail.draft_text.is_empty());

    // The store never sees it.
    assert_eq!(state.store().find("1").unwrap().reviews().len(), 2);

    detail_cmd::close_facility(&state).await;
    assert!(detail_cmd::post_review(&state).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn report_acknowledgment_auto_dismisses() {
    let state = state_with(ScriptedBackend::default());
    detail_cmd::open_facility(&state, "4".into()).await.unwrap();
    detail_cmd::open_report(&state).await.unwrap();

    // No category yet.
    assert!(detail_cmd::submit_report(&state).await.unwrap().is_none());

    detail_cmd::select_report_category(&state, ReportCategory::IncorrectHours)
        .await
        .unwrap();
    detail_cmd::set_report_details(&state, "Closes at 5".into())
        .await
        .unwrap();
    let report = detail_cmd::submit_report(&state).await.unwrap().unwrap();
    assert_eq!(report.facility_id, "4");

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let detail = detail_cmd::get_facility_detail(&state).await.unwrap();
    assert!(detail.report_acknowledged);
    assert!(detail.report_open);

    tokio::time::sleep(Duration::from_millis(600)).await;
    let detail = detail_cmd::get_facility_detail(&state).await.unwrap();
    assert!(!detail.report_acknowledged);
    assert!(!detail.report_open);
    assert!(detail.report_category.is_none());
    assert!(detail.report_details.is_empty());
}
