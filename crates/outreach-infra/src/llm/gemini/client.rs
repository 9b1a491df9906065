//! GeminiClient -- concrete [`CompletionClient`] implementation for the
//! Google Generative Language API.
//!
//! Sends single-prompt requests to `models/{model}:generateContent` with
//! the API key in the `x-goog-api-key` header. The key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use outreach_core::llm::CompletionClient;
use outreach_types::llm::{CompletionError, CompletionRequest, CompletionResponse};

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

/// Gemini completion client.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and only exposed when
/// constructing HTTP request headers. The struct intentionally does not
/// derive `Debug`.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Default model identifier (e.g., "gemini-1.5-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The default model for this client.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL, e.g. to point at a proxy or a local stub server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the generateContent URL for a request, preferring the
    /// request's model over the client default.
    fn url(&self, request: &CompletionRequest) -> String {
        let model = if request.model.is_empty() {
            &self.model
        } else {
            &request.model
        };
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into the Gemini wire shape.
    fn to_gemini_request(request: &CompletionRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: Some(request.max_output_tokens),
            }),
        }
    }
}

impl CompletionClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationFailed,
                429 => CompletionError::RateLimited {
                    retry_after_ms: None,
                },
                _ => CompletionError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let gemini_resp: GenerateContentResponse = response.json().await.map_err(|e| {
            CompletionError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        // The text is the concatenation of the first candidate's parts.
        let content = gemini_resp
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or_else(|| {
                CompletionError::Deserialization("response contained no candidates".to_string())
            })?;

        Ok(CompletionResponse { content })
    }
}
