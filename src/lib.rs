pub mod browse;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod enrichment;
pub mod geolocation;
pub mod map_view;
pub mod models;
pub mod navigation;
pub mod ranking;
pub mod travel;
pub mod utils;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use browse::BrowseState;
use catalog::FacilityStore;
use config::AppConfig;
use detail::DetailSession;
use enrichment::{EnrichmentBackend, EnrichmentController, GeminiClient, RefreshOutcome};
use geolocation::EnvLocationSource;
use models::Coordinate;

/// Everything the UI shell talks to, shared across commands.
pub struct AppState<B = GeminiClient> {
    pub(crate) config: AppConfig,
    pub(crate) store: FacilityStore,
    pub(crate) browse: Mutex<BrowseState>,
    pub(crate) detail: Arc<Mutex<Option<DetailSession>>>,
    pub(crate) location: Mutex<Option<Coordinate>>,
    pub(crate) enrichment: EnrichmentController<B>,
}

impl<B: EnrichmentBackend> AppState<B> {
    /// Fresh state over the built-in mock list.
    pub fn new(config: AppConfig, backend: B) -> Self {
        let store = FacilityStore::with_mock_data();
        let enrichment = EnrichmentController::new(backend, store.clone());
        Self {
            config,
            store,
            browse: Mutex::new(BrowseState::new()),
            detail: Arc::new(Mutex::new(None)),
            location: Mutex::new(None),
            enrichment,
        }
    }
}

impl<B> AppState<B> {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &FacilityStore {
        &self.store
    }
}

impl AppState<GeminiClient> {
    pub fn with_gemini(config: AppConfig) -> Self {
        let client = GeminiClient::new(config.genai.clone());
        Self::new(config, client)
    }
}

/// Headless entry point: locate, refresh once, log the ranked list.
pub fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    utils::init_logging(config.debug);

    log::info!("CareWay starting up...");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let state = AppState::with_gemini(config);

        let located = browse::commands::locate_and_refresh(&state, &EnvLocationSource).await;
        if let RefreshOutcome::Failed { .. } = located.refresh {
            log::warn!("Live refresh unavailable; showing built-in facilities");
        }

        let browse = browse::commands::get_browse_state(&state).await;
        let cards = browse::commands::list_facilities(&state).await;
        log::info!(
            "{} facilities near {}, {} ({:?}, sorted {:?})",
            cards.len(),
            located.location.lat,
            located.location.lng,
            browse.travel_mode,
            browse.sort
        );
        for card in &cards {
            log::info!(
                "  {:<36} {:<16} {:>5.1} km {:>3} min  ★{}",
                card.facility.name,
                card.facility.kind.as_str(),
                card.facility.distance,
                card.travel_minutes,
                card.facility.rating
            );
        }

        Ok::<(), anyhow::Error>(())
    })
}
