//! Model Fallback Chain
//!
//! Tries each candidate model in priority order until one produces an
//! analysis. Every failed attempt is recorded and the chain moves on; only
//! exhaustion of the whole list yields a failure result.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use code_intel_core::{AnalysisMode, AttemptOutcome, FailureReason};
use code_intel_llm::AttemptExecutor;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::report::render_failure_report;
use crate::models::analysis::AnalysisResult;

/// Record of a single attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackAttempt {
    /// Candidate that was tried
    pub model: String,
    /// Whether this attempt succeeded
    pub success: bool,
    /// Failure reason if failed
    pub failure_reason: Option<FailureReason>,
    /// Error message if failed
    pub error_message: Option<String>,
    /// Duration of the attempt in milliseconds
    pub duration_ms: u64,
    /// Timestamp when attempt started
    pub started_at: String,
}

impl FallbackAttempt {
    /// Create a successful attempt record
    pub fn success(model: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            model: model.into(),
            success: true,
            failure_reason: None,
            error_message: None,
            duration_ms,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a failed attempt record
    pub fn failure(
        model: impl Into<String>,
        reason: FailureReason,
        error: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            model: model.into(),
            success: false,
            failure_reason: Some(reason),
            error_message: Some(error.into()),
            duration_ms,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Log of all attempts made by one invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallbackExecutionLog {
    /// All attempts made, in order
    pub attempts: Vec<FallbackAttempt>,
    /// Total duration in milliseconds
    pub total_duration_ms: u64,
    /// Candidate that succeeded (if any)
    pub successful_model: Option<String>,
    /// Whether execution ultimately succeeded
    pub overall_success: bool,
}

impl FallbackExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attempt to the log
    pub fn add_attempt(&mut self, attempt: FallbackAttempt) {
        self.total_duration_ms += attempt.duration_ms;
        if attempt.success {
            self.successful_model = Some(attempt.model.clone());
            self.overall_success = true;
        }
        self.attempts.push(attempt);
    }

    /// Get the number of failed attempts
    pub fn failed_attempts_count(&self) -> usize {
        self.attempts.iter().filter(|a| !a.success).count()
    }
}

/// Ordered candidate list driven against one executor
#[derive(Clone)]
pub struct ModelFallbackChain {
    candidates: Vec<String>,
    executor: Arc<dyn AttemptExecutor>,
}

impl std::fmt::Debug for ModelFallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelFallbackChain")
            .field("candidates", &self.candidates)
            .field("executor", &self.executor.name())
            .finish()
    }
}

impl ModelFallbackChain {
    /// Create a chain over `candidates`. Duplicates are dropped, keeping the
    /// first occurrence.
    pub fn new<I, S>(candidates: I, executor: Arc<dyn AttemptExecutor>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let candidates = candidates
            .into_iter()
            .map(Into::into)
            .filter(|c: &String| seen.insert(c.clone()))
            .collect();
        Self {
            candidates,
            executor,
        }
    }

    /// Candidates in the order they are tried
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Analyze `source` in the mode named by `mode`.
    ///
    /// Unknown mode names fall back to explain. Never fails: total failure is
    /// reported through the returned result.
    pub async fn analyze(&self, source: &str, mode: &str) -> AnalysisResult {
        self.analyze_with_log(source, AnalysisMode::parse_lenient(mode))
            .await
            .0
    }

    /// Analyze and return the attempt log alongside the result
    pub async fn analyze_with_log(
        &self,
        source: &str,
        mode: AnalysisMode,
    ) -> (AnalysisResult, FallbackExecutionLog) {
        let mut log = FallbackExecutionLog::new();

        for candidate in &self.candidates {
            info!("Attempting {} analysis with model: {}", mode, candidate);
            let attempt_start = Instant::now();

            let outcome = match self.executor.attempt(candidate, source, mode).await {
                Ok(outcome) => outcome,
                Err(e) => AttemptOutcome::server_error(e.to_string()),
            };
            let duration_ms = attempt_start.elapsed().as_millis() as u64;

            match outcome {
                AttemptOutcome::Success { text } => {
                    info!("Model {} succeeded in {}ms", candidate, duration_ms);
                    log.add_attempt(FallbackAttempt::success(candidate, duration_ms));
                    return (AnalysisResult::success(mode, text, candidate), log);
                }
                failed => {
                    let reason = failed
                        .failure_reason()
                        .unwrap_or(FailureReason::ServerError);
                    let message = failed.describe();
                    warn!("Model {} failed: {} (reason: {})", candidate, message, reason);
                    log.add_attempt(FallbackAttempt::failure(
                        candidate,
                        reason,
                        message,
                        duration_ms,
                    ));
                }
            }
        }

        error!(
            "All models in fallback chain failed after {} attempts",
            log.attempts.len()
        );
        (AnalysisResult::failure(render_failure_report(&log)), log)
    }
}
