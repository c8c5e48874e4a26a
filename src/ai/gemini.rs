use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument, trace};

use crate::ai::common::{
    build_generate_body, generate_content_url, parse_generated_text, send_gemini_request,
};
use crate::ai::config::AiConfig;

/// Anything that turns a prompt into generated text.
///
/// The itinerary pipeline only depends on this trait, so tests can swap the
/// HTTP client for a scripted generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: AiConfig,
}

impl GeminiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        generate_text(
            &self.client,
            &self.config.api_key,
            &self.config.model,
            prompt,
            Some(self.config.base_url()),
        )
        .await
    }
}

/// Send one prompt to Gemini and return the concatenated reply text.
///
/// `base_url` overrides the public models endpoint; integration tests point
/// it at a mock server.
#[instrument(level = "trace", skip(client, api_key, prompt), fields(prompt_chars = prompt.len()))]
pub async fn generate_text(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
    base_url: Option<&str>,
) -> Result<String> {
    let base = base_url.unwrap_or(crate::ai::common::GEMINI_API_URL);
    let url = generate_content_url(base, model);
    let body = build_generate_body(prompt);

    debug!(url, model, "sending generateContent request");

    let builder = client.post(&url).json(&body);
    let resp = send_gemini_request(api_key, builder).await?;

    let raw = resp.text().await.map_err(reqwest::Error::without_url)?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "generateContent response body");
    trace!(raw = %raw, "generateContent response");

    parse_generated_text(&raw)
}
