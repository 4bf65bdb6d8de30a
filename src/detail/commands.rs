use std::sync::Arc;

use serde::Serialize;
use tokio::{
    sync::Mutex,
    time::{self, Instant},
};

use crate::{
    models::{Facility, Review, RouteInsight},
    navigation::{facility_directions_url, facility_search_url},
    AppState,
};

use super::{DetailSession, IssueReport, ReportCategory, REPORT_ACK_DURATION};

/// Everything the detail overlay renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDetail {
    pub facility: Facility,
    pub reviews: Vec<Review>,
    pub directions_url: String,
    pub maps_search_url: String,
    pub price_label: &'static str,
    pub route_insight: Option<RouteInsight>,
    pub recently_cleaned: bool,
    pub draft_rating: u8,
    pub draft_text: String,
    pub report_open: bool,
    pub report_category: Option<ReportCategory>,
    pub report_details: String,
    pub report_acknowledged: bool,
}

impl FacilityDetail {
    fn from_session(session: &DetailSession) -> Self {
        let facility = session.facility();
        Self {
            facility: facility.clone(),
            reviews: session.reviews().to_vec(),
            directions_url: facility_directions_url(facility),
            maps_search_url: facility_search_url(facility),
            price_label: facility.price_label(),
            route_insight: facility.route_insight(),
            recently_cleaned: facility.is_highly_clean(),
            draft_rating: session.draft.rating(),
            draft_text: session.draft.text.clone(),
            report_open: session.report.is_open,
            report_category: session.report.category,
            report_details: session.report.details.clone(),
            report_acknowledged: session.report.is_acknowledged(),
        }
    }
}

fn no_open_facility() -> String {
    "no facility is open".to_string()
}

async fn with_session<B, T>(
    state: &AppState<B>,
    f: impl FnOnce(&mut DetailSession) -> Result<T, String>,
) -> Result<T, String> {
    let mut guard = state.detail.lock().await;
    let session = guard.as_mut().ok_or_else(no_open_facility)?;
    f(session)
}

pub async fn open_facility<B>(
    state: &AppState<B>,
    facility_id: String,
) -> Result<FacilityDetail, String> {
    let facility = state
        .store
        .find(&facility_id)
        .ok_or_else(|| format!("unknown facility {facility_id}"))?;

    let session = DetailSession::open(facility);
    let detail = FacilityDetail::from_session(&session);
    *state.detail.lock().await = Some(session);
    Ok(detail)
}

pub async fn close_facility<B>(state: &AppState<B>) {
    *state.detail.lock().await = None;
}

pub async fn get_facility_detail<B>(state: &AppState<B>) -> Option<FacilityDetail> {
    state
        .detail
        .lock()
        .await
        .as_ref()
        .map(FacilityDetail::from_session)
}

pub async fn set_review_rating<B>(state: &AppState<B>, rating: u8) -> Result<(), String> {
    with_session(state, |session| {
        session.draft.set_rating(rating).map_err(|e| e.to_string())
    })
    .await
}

pub async fn set_review_text<B>(state: &AppState<B>, text: String) -> Result<(), String> {
    with_session(state, |session| {
        session.draft.text = text;
        Ok(())
    })
    .await
}

/// `Ok(None)` when the draft is incomplete; the draft is then left as is.
pub async fn post_review<B>(state: &AppState<B>) -> Result<Option<Review>, String> {
    with_session(state, |session| Ok(session.post_review())).await
}

pub async fn open_report<B>(state: &AppState<B>) -> Result<(), String> {
    with_session(state, |session| {
        session.report.open();
        Ok(())
    })
    .await
}

pub async fn select_report_category<B>(
    state: &AppState<B>,
    category: ReportCategory,
) -> Result<(), String> {
    with_session(state, |session| {
        session.report.category = Some(category);
        Ok(())
    })
    .await
}

pub async fn set_report_details<B>(state: &AppState<B>, details: String) -> Result<(), String> {
    with_session(state, |session| {
        session.report.details = details;
        Ok(())
    })
    .await
}

/// Submit the issue report and schedule the acknowledgment to dismiss itself.
/// `Ok(None)` when no category has been chosen.
pub async fn submit_report<B>(state: &AppState<B>) -> Result<Option<IssueReport>, String> {
    let report = with_session(state, |session| Ok(session.submit_report(Instant::now()))).await?;

    if report.is_some() {
        schedule_report_dismiss(Arc::clone(&state.detail));
    }
    Ok(report)
}

fn schedule_report_dismiss(detail: Arc<Mutex<Option<DetailSession>>>) {
    tokio::spawn(async move {
        time::sleep(REPORT_ACK_DURATION).await;
        if let Some(session) = detail.lock().await.as_mut() {
            session.report.poll_dismiss(Instant::now());
        }
    });
}
