//! Google Gemini REST provider
//!
//! Single-shot `generateContent` calls via reqwest with a per-attempt
//! timeout. HTTP outcomes are mapped onto the transient/fatal error
//! taxonomy; retry decisions are made upstream in the consultation
//! client.

use crate::errors::ProviderError;
use crate::provider::TextGenerator;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Gemini API endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature; low, the task wants consistent structure
const TEMPERATURE: f64 = 0.3;

/// Response token cap
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Gemini text-generation client
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiProvider {
    /// Create a provider with the given credential, model and
    /// per-attempt timeout.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Unknown(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model,
            api_key,
            timeout,
        })
    }

    /// Override the API base URL (used by tests against a local stub)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Model name this provider targets
    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify_status(status: StatusCode, body: &str) -> ProviderError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthFailed,
            StatusCode::BAD_REQUEST => {
                ProviderError::MalformedRequest(truncate_body(body))
            }
            s if s.is_server_error() => ProviderError::ServerError {
                status: s.as_u16(),
            },
            s => ProviderError::Unknown(format!("HTTP {}: {}", s, truncate_body(body))),
        }
    }

    fn classify_send_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            ProviderError::NetworkUnreachable(err.to_string())
        } else {
            ProviderError::Unknown(err.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_status(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unknown(format!("undecodable response body: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| ProviderError::Unknown("response contained no candidates".to_string()))?;

        debug!(response_chars = text.len(), "generateContent succeeded");
        Ok(text)
    }
}

/// Keep error bodies short enough for a terminal line
fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let cut: String = trimmed.chars().take(200).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            GeminiProvider::classify_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ProviderError::RateLimited
        );
        assert_eq!(
            GeminiProvider::classify_status(StatusCode::UNAUTHORIZED, ""),
            ProviderError::AuthFailed
        );
        assert_eq!(
            GeminiProvider::classify_status(StatusCode::FORBIDDEN, ""),
            ProviderError::AuthFailed
        );
        assert!(matches!(
            GeminiProvider::classify_status(StatusCode::BAD_REQUEST, "bad field"),
            ProviderError::MalformedRequest(_)
        ));
        assert_eq!(
            GeminiProvider::classify_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            ProviderError::ServerError { status: 503 }
        );
        assert!(matches!(
            GeminiProvider::classify_status(StatusCode::IM_A_TEAPOT, ""),
            ProviderError::Unknown(_)
        ));
    }

    #[test]
    fn test_response_deserialization() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}], "role": "model"}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "hello");
    }

    #[test]
    fn test_empty_candidates_deserialize() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.chars().count() <= 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("  short  "), "short");
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "prompt".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }
}
