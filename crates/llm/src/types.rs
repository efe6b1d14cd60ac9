//! Executor Types
//!
//! Wire shapes for the `generateContent` endpoint, generation parameters, and
//! the one fault an attempt may propagate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2500,
        }
    }
}

/// Request body for `:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationParams,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part
    pub fn single_text(text: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
            generation_config: params,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Extract `candidates[0].content.parts[0].text` from a response body.
///
/// Any other shape yields `None`.
pub fn extract_text(body: &serde_json::Value) -> Option<&str> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(serde_json::Value::as_str)
}

/// Structured error fields from a non-success response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
    pub status: Option<String>,
}

impl ApiErrorDetail {
    /// Parse `{"error": {"message": ..., "status": ...}}`, tolerating any
    /// other body.
    pub fn parse(body: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        let field = |name: &str| {
            value
                .get("error")
                .and_then(|e| e.get(name))
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        Self {
            message: field("message"),
            status: field("status"),
        }
    }
}

/// Faults an attempt propagates instead of classifying
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// A success response whose body is not JSON at all
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
