use std::future::Future;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{json, Value};

use crate::config::GenAiSettings;
use crate::models::Coordinate;

/// Anything that can answer a grounded facility lookup. Only success or failure
/// matters; the payload is never read.
pub trait EnrichmentBackend: Send + Sync {
    fn lookup(
        &self,
        prompt: &str,
        location: Coordinate,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Gemini `generateContent` over REST with Google Maps grounding.
pub struct GeminiClient {
    http: reqwest::Client,
    settings: GenAiSettings,
}

impl GeminiClient {
    pub fn new(settings: GenAiSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint, self.settings.model
        )
    }
}

pub(crate) fn request_body(prompt: &str, location: Coordinate) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "tools": [{ "googleMaps": {} }],
        "toolConfig": {
            "retrievalConfig": {
                "latLng": { "latitude": location.lat, "longitude": location.lng }
            }
        }
    })
}

impl EnrichmentBackend for GeminiClient {
    async fn lookup(&self, prompt: &str, location: Coordinate) -> Result<()> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("no API key configured (set GEMINI_API_KEY)"))?;

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request_body(prompt, location))
            .send()
            .await
            .context("generateContent request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("generateContent returned {}: {}", status, text);
        }

        let body: Value = response
            .json()
            .await
            .context("generateContent returned a non-JSON body")?;

        if body.get("candidates").is_none() {
            bail!("generateContent response has no candidates");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_prompt_and_grounding_location() {
        let body = request_body("find toilets", Coordinate::new(12.0, 77.0));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "find toilets");
        assert!(body["tools"][0].get("googleMaps").is_some());
        assert_eq!(
            body["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            12.0
        );
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::new(GenAiSettings::default());
        assert_eq!(
            client.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiClient::new(GenAiSettings::default());
        let err = client
            .lookup("prompt", Coordinate::new(0.0, 0.0))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}
