use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::Serialize;

use crate::catalog::{mock_facilities, FacilityStore};
use crate::models::{AppMode, Coordinate, Facility, Review};

use super::{
    client::EnrichmentBackend,
    prompts::{
        facility_search_prompt, LIVE_ADDRESS_SUFFIX, VERIFIED_REVIEW_AUTHOR,
        VERIFIED_REVIEW_COMMENT, VERIFIED_REVIEW_DATE,
    },
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum RefreshOutcome {
    Refreshed { count: usize },
    Failed { reason: String },
}

/// Runs the live lookup and, when it succeeds, swaps the store's list for the
/// decorated mock data.
pub struct EnrichmentController<B> {
    backend: Arc<B>,
    store: FacilityStore,
    loading: Arc<AtomicBool>,
}

impl<B> Clone for EnrichmentController<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            store: self.store.clone(),
            loading: Arc::clone(&self.loading),
        }
    }
}

impl<B: EnrichmentBackend> EnrichmentController<B> {
    pub fn new(backend: B, store: FacilityStore) -> Self {
        Self {
            backend: Arc::new(backend),
            store,
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// One lookup for `mode` around `location`. Failures are logged and leave
    /// the current list in place; the loading flag is cleared either way.
    pub async fn refresh(&self, mode: AppMode, location: Coordinate) -> RefreshOutcome {
        self.loading.store(true, Ordering::SeqCst);
        crate::log_info!(
            "[enrichment] looking up {:?} facilities near {}, {}",
            mode,
            location.lat,
            location.lng
        );

        let prompt = facility_search_prompt(mode, location);
        let result = match self.backend.lookup(&prompt, location).await {
            Ok(()) => self.store.replace_all(decorate_live(mock_facilities())),
            Err(err) => Err(err),
        };

        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => {
                let count = self.store.len();
                crate::log_info!("[enrichment] refreshed {} facilities", count);
                RefreshOutcome::Refreshed { count }
            }
            Err(err) => {
                crate::log_error!("[enrichment] AI fetch error: {:#}", err);
                RefreshOutcome::Failed {
                    reason: format!("{err:#}"),
                }
            }
        }
    }
}

/// Tag each facility as live-verified: address suffix plus one synthetic review.
pub fn decorate_live(facilities: Vec<Facility>) -> Vec<Facility> {
    facilities
        .into_iter()
        .enumerate()
        .map(|(index, mut facility)| {
            facility.address.push_str(LIVE_ADDRESS_SUFFIX);
            facility.reviews.get_or_insert_with(Vec::new).push(Review::new(
                format!("ai-{index}"),
                VERIFIED_REVIEW_AUTHOR,
                5,
                VERIFIED_REVIEW_COMMENT,
                VERIFIED_REVIEW_DATE,
            ));
            facility
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_appends_after_existing_reviews() {
        let decorated = decorate_live(mock_facilities());
        let first = &decorated[0];
        assert!(first.address.ends_with(" (Live Map Update)"));

        let reviews = first.reviews();
        assert_eq!(reviews.len(), 3);
        let last = reviews.last().unwrap();
        assert_eq!(last.id, "ai-0");
        assert_eq!(last.user_name, "Verified Assistant");
        assert_eq!(last.rating, 5);
        assert_eq!(last.date, "Live");
    }

    #[test]
    fn decoration_creates_review_list_when_absent() {
        let decorated = decorate_live(mock_facilities());
        let third = &decorated[2];
        assert_eq!(third.reviews().len(), 1);
        assert_eq!(third.reviews()[0].id, "ai-2");
    }
}
