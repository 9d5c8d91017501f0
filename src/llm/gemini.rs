// src/llm/gemini.rs
// Gemini generateContent backend.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use super::{CompletionBackend, CompletionError};
use crate::config::AulaConfig;

pub struct GeminiBackend {
    client: Client,
    url: String,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, api_key })
    }

    pub fn from_config(config: &AulaConfig) -> anyhow::Result<Self> {
        Self::new(
            config.gemini_generate_url(),
            config.gemini_api_key.clone(),
            Duration::from_secs(config.gemini_timeout),
        )
    }

    /// Concatenate the text parts of the first candidate. A reply with no
    /// candidates or no text parts yields an empty string, which the
    /// completion client maps to its empty-reply fallback.
    fn extract_text(raw: &Value) -> String {
        raw["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        debug!("Gemini request: {} prompt chars", prompt.len());

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Service { status, body });
        }

        let raw = response.json::<Value>().await?;
        Ok(Self::extract_text(&raw))
    }
}
