//! Gemini Executor
//!
//! Implementation of the AttemptExecutor trait for the Generative Language
//! API `generateContent` endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use code_intel_core::{AnalysisMode, AttemptOutcome, PromptCatalog};
use tracing::debug;

use super::provider::{classify_http_failure, AttemptExecutor};
use super::types::{
    extract_text, ExecutorError, ExecutorResult, GenerateContentRequest, GenerationParams,
};

/// Default Generative Language API endpoint
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default deadline for a single attempt
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Static configuration for the Gemini executor
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Base URL; the candidate id is appended as a path segment
    pub base_url: String,
    /// API key, sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Deadline applied to every attempt independently
    pub attempt_timeout: Duration,
    pub params: GenerationParams,
    pub prompts: PromptCatalog,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_URL.to_string(),
            api_key: None,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            params: GenerationParams::default(),
            prompts: PromptCatalog::default(),
        }
    }
}

/// Gemini executor
pub struct GeminiExecutor {
    settings: GeminiSettings,
    client: reqwest::Client,
}

impl GeminiExecutor {
    /// Create a new executor with a default client
    pub fn new(settings: GeminiSettings) -> Self {
        Self::with_client(settings, reqwest::Client::new())
    }

    /// Create a new executor sharing an existing client
    pub fn with_client(settings: GeminiSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    /// Endpoint for one candidate
    fn endpoint(&self, candidate: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            candidate
        )
    }

    /// Build the request body for the API
    fn build_request(&self, source: &str, mode: AnalysisMode) -> GenerateContentRequest {
        let instruction = self.settings.prompts.instruction(source, mode);
        GenerateContentRequest::single_text(instruction, self.settings.params)
    }

    /// Send the request and read the body; no deadline applied here.
    async fn send(
        &self,
        candidate: &str,
        request: &GenerateContentRequest,
    ) -> reqwest::Result<(u16, String)> {
        let mut builder = self
            .client
            .post(self.endpoint(candidate))
            .header("Content-Type", "application/json")
            .json(request);
        if let Some(key) = &self.settings.api_key {
            builder = builder.query(&[("key", key)]);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl AttemptExecutor for GeminiExecutor {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn attempt(
        &self,
        candidate: &str,
        source: &str,
        mode: AnalysisMode,
    ) -> ExecutorResult<AttemptOutcome> {
        let request = self.build_request(source, mode);
        let started = Instant::now();

        // Dropping the send future on deadline cancels the in-flight request.
        let sent = tokio::time::timeout(
            self.settings.attempt_timeout,
            self.send(candidate, &request),
        )
        .await;

        let (status, body) = match sent {
            Err(_) => {
                debug!(
                    "{} timed out after {}ms",
                    candidate,
                    started.elapsed().as_millis()
                );
                return Ok(AttemptOutcome::Timeout);
            }
            Ok(Err(e)) if e.is_timeout() => return Ok(AttemptOutcome::Timeout),
            // Strip the URL: it carries the API key.
            Ok(Err(e)) => {
                return Ok(AttemptOutcome::server_error(format!(
                    "transport error: {}",
                    e.without_url()
                )))
            }
            Ok(Ok(pair)) => pair,
        };

        debug!(
            "{} answered HTTP {} in {}ms",
            candidate,
            status,
            started.elapsed().as_millis()
        );

        if !(200..300).contains(&status) {
            return Ok(classify_http_failure(status, &body));
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ExecutorError::MalformedResponse {
                message: e.to_string(),
            })?;

        Ok(match extract_text(&value) {
            Some(text) if !text.trim().is_empty() => AttemptOutcome::success(text),
            _ => AttemptOutcome::Empty,
        })
    }
}
