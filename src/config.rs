use anyhow::{Context, Result};

use crate::models::Coordinate;
use crate::ranking::RankingConfig;

pub const DEFAULT_GENAI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GENAI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Central Bangalore, used when the device location is unavailable.
pub const FALLBACK_LOCATION: Coordinate = Coordinate::new(12.9716, 77.5946);

#[derive(Debug, Clone)]
pub struct GenAiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for GenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GENAI_MODEL.into(),
            endpoint: DEFAULT_GENAI_ENDPOINT.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub genai: GenAiSettings,
    pub ranking: RankingConfig,
    pub fallback_location: Coordinate,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            genai: GenAiSettings::default(),
            ranking: RankingConfig::default(),
            fallback_location: FALLBACK_LOCATION,
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY"));
        let model = non_empty("CAREWAY_GENAI_MODEL").unwrap_or_else(|| DEFAULT_GENAI_MODEL.into());
        let endpoint = non_empty("CAREWAY_GENAI_ENDPOINT")
            .map(|e| e.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GENAI_ENDPOINT.into());

        let debug = non_empty("CAREWAY_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!("CAREWAY_GENAI_ENDPOINT must be an http(s) URL, got {endpoint}");
        }

        Ok(Self {
            genai: GenAiSettings {
                api_key,
                model,
                endpoint,
            },
            ranking: RankingConfig::default(),
            fallback_location: FALLBACK_LOCATION,
            debug,
        })
    }
}

/// Parse a latitude/longitude pair from two raw strings.
pub fn parse_coordinate(lat: &str, lng: &str) -> Result<Coordinate> {
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude {lat:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude {lng:?}"))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        anyhow::bail!("coordinate ({lat}, {lng}) out of range");
    }
    Ok(Coordinate::new(lat, lng))
}
