pub mod client;
pub mod controller;
pub mod prompts;

pub use client::{EnrichmentBackend, GeminiClient};
pub use controller::{decorate_live, EnrichmentController, RefreshOutcome};
