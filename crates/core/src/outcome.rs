//! Attempt Outcomes
//!
//! The closed vocabulary for what a single request to a single candidate can
//! produce. Every outcome other than `Success` moves the fallback chain on to
//! the next candidate; no failure kind aborts the chain.

use serde::{Deserialize, Serialize};

/// Result of one bounded-time attempt against one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The candidate produced usable text
    Success { text: String },
    /// Well-formed response with no usable content
    Empty,
    /// Quota or rate limit exhausted
    RateLimited { message: String },
    /// Candidate is unknown or unsupported by the endpoint
    NotFound { message: String },
    /// The per-attempt deadline elapsed
    Timeout,
    /// Any other failure
    ServerError { message: String },
}

impl AttemptOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::ServerError {
            message: message.into(),
        }
    }

    /// Failure kind, or `None` for `Success`
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            AttemptOutcome::Success { .. } => None,
            AttemptOutcome::Empty => Some(FailureReason::Empty),
            AttemptOutcome::RateLimited { .. } => Some(FailureReason::RateLimited),
            AttemptOutcome::NotFound { .. } => Some(FailureReason::NotFound),
            AttemptOutcome::Timeout => Some(FailureReason::Timeout),
            AttemptOutcome::ServerError { .. } => Some(FailureReason::ServerError),
        }
    }

    /// Human-readable description of a failure
    pub fn describe(&self) -> String {
        match self {
            AttemptOutcome::Success { .. } => "success".to_string(),
            AttemptOutcome::Empty => "response contained no text".to_string(),
            AttemptOutcome::RateLimited { message } => format!("rate limited: {}", message),
            AttemptOutcome::NotFound { message } => format!("model not found: {}", message),
            AttemptOutcome::Timeout => "request timed out".to_string(),
            AttemptOutcome::ServerError { message } => format!("server error: {}", message),
        }
    }
}

/// Kind of a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    Empty,
    RateLimited,
    NotFound,
    Timeout,
    ServerError,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Empty => write!(f, "empty"),
            FailureReason::RateLimited => write!(f, "rate_limited"),
            FailureReason::NotFound => write!(f, "not_found"),
            FailureReason::Timeout => write!(f, "timeout"),
            FailureReason::ServerError => write!(f, "server_error"),
        }
    }
}
