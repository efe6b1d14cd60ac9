//! Attempt Executor Trait
//!
//! Defines the interface the fallback chain drives, plus the HTTP status
//! classification shared by executor implementations.

use async_trait::async_trait;
use code_intel_core::{AnalysisMode, AttemptOutcome};

use super::types::{ApiErrorDetail, ExecutorResult};

/// Issues one bounded-time request to one candidate.
///
/// Ordinary failures (rate limits, unknown models, timeouts, server errors,
/// empty responses) are returned as `AttemptOutcome` values. Only a response
/// that cannot be parsed at all comes back as `Err`.
#[async_trait]
pub trait AttemptExecutor: Send + Sync {
    /// Returns the backend name for identification.
    fn name(&self) -> &'static str;

    /// Attempt an analysis of `source` in `mode` against `candidate`.
    async fn attempt(
        &self,
        candidate: &str,
        source: &str,
        mode: AnalysisMode,
    ) -> ExecutorResult<AttemptOutcome>;
}

/// Classify a non-success HTTP response into an attempt outcome
pub fn classify_http_failure(status: u16, body: &str) -> AttemptOutcome {
    let ApiErrorDetail {
        message,
        status: api_status,
    } = ApiErrorDetail::parse(body);
    let message = message.unwrap_or_else(|| status_message(status));

    match (status, api_status.as_deref()) {
        (429, _) | (_, Some("RESOURCE_EXHAUSTED")) => AttemptOutcome::rate_limited(message),
        (404, _) | (_, Some("NOT_FOUND")) => AttemptOutcome::not_found(message),
        _ => AttemptOutcome::server_error(message),
    }
}

fn status_message(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("HTTP {} {}", status, reason),
        None => format!("HTTP {}", status),
    }
}
