use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::{debug, warn};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Build the `generateContent` URL for `model` under `base`.
pub fn generate_content_url(base: &str, model: &str) -> String {
    format!("{}/{}:generateContent", base.trim_end_matches('/'), model)
}

/// Build a single-turn `generateContent` body carrying `prompt` as its only
/// text part.
pub fn build_generate_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// Header carrying the API key. The key never goes into the URL, so transport
/// errors that echo the URL cannot expose it.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Send a prepared request to the Gemini API, attaching the key and turning
/// non-success statuses into errors.
pub async fn send_gemini_request(
    api_key: &str,
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    let resp = builder
        .header(API_KEY_HEADER, api_key)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Gemini API error");
        return Err(anyhow!("Gemini API error {status}: {err_text}"));
    }

    Ok(resp)
}

/// Extract the generated text from a raw `generateContent` response.
///
/// All text parts of the first candidate are concatenated in order. A reply
/// with no candidate or no text at all is an error so callers can fall back.
pub fn parse_generated_text(raw: &str) -> Result<String> {
    let resp: GenerateResponse = serde_json::from_str(raw)?;
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing candidate"))?;
    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default();

    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() {
        return Err(anyhow!("candidate has no text parts"));
    }
    debug!(chars = text.chars().count(), "parsed generated text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_body_wraps_prompt() {
        let body = build_generate_body("hello");
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn url_joins_base_and_model() {
        assert_eq!(
            generate_content_url("http://x/v1beta/models/", "gemini-1.5-flash"),
            "http://x/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn parse_concatenates_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Day 1"},{"text":" and more"}]}}]}"#;
        assert_eq!(parse_generated_text(raw).unwrap(), "Day 1 and more");
    }

    #[test]
    fn parse_rejects_missing_candidates() {
        assert!(parse_generated_text(r#"{"candidates":[]}"#).is_err());
        assert!(parse_generated_text(r#"{}"#).is_err());
    }

    #[test]
    fn parse_rejects_blocked_candidate() {
        // Safety-blocked replies come back without content.
        let raw = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        assert!(parse_generated_text(raw).is_err());
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(parse_generated_text("not json").is_err());
    }
}
