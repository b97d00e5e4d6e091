//! Gemini-backed tip provider

use std::time::Duration;

use async_trait::async_trait;
use shared::{session_debug, session_warn};

use crate::core::messages;
use crate::error::TipFetchError;
use crate::traits::TipProvider;
use crate::types::TipRequest;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Calls the Generative Language `generateContent` endpoint
pub struct GeminiTipClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    max_output_tokens: u32,
    temperature: f32,
}

impl GeminiTipClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            max_output_tokens: 150,
            temperature: 0.7,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Per-request timeout enforced by the HTTP client
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => self.client = client,
            Err(e) => {
                session_warn!(
                    "Could not build HTTP client with {} ms timeout, keeping default client: {}",
                    timeout.as_millis(),
                    e
                );
            }
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TipProvider for GeminiTipClient {
    async fn fetch_tip(&self, request: &TipRequest) -> Result<String, TipFetchError> {
        let api_key = self.api_key.as_ref().ok_or(TipFetchError::MissingApiKey)?;

        let prompt = messages::tip_prompt(
            request.locale,
            request.area,
            request.total_units,
            &request.model_name,
        );

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": self.max_output_tokens,
                "temperature": self.temperature
            }
        });

        let request_start = std::time::Instant::now();

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TipFetchError::Timeout { millis: request_start.elapsed().as_millis() as u64 }
                } else {
                    TipFetchError::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(TipFetchError::Http {
                status: response.status().as_u16(),
            });
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TipFetchError::InvalidResponse(e.to_string()))?;

        let text = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or(TipFetchError::EmptyResponse)?;

        session_debug!(
            "Tip received from {} in {} ms",
            self.model,
            request_start.elapsed().as_millis()
        );

        Ok(text.to_string())
    }
}
