use std::env;

use crate::ai::common::GEMINI_API_URL;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL of the models endpoint. `None` means the public Gemini API.
    pub api_url: Option<String>,
}

impl AiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("GOOGLE_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return None,
        };
        Some(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_url: env::var("GEMINI_API_URL").ok(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(GEMINI_API_URL)
    }
}

// The key is deliberately left out so configs can be logged.
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("model", &self.model)
            .field("api_url", &self.base_url())
            .finish_non_exhaustive()
    }
}
