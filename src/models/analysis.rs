//! Analysis Result Models
//!
//! The single value an analysis invocation hands back to its caller.

use code_intel_core::AnalysisMode;
use serde::{Deserialize, Serialize};

/// Title of the result returned when every candidate failed
pub const FAILURE_TITLE: &str = "Analysis Failed";

/// Terminal result of one analysis invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Mode-derived title, or `FAILURE_TITLE`
    pub title: String,
    /// Markdown body: the model's answer or the failure report
    pub content: String,
    /// Candidate that produced the answer; `None` on failure
    pub source_model: Option<String>,
}

impl AnalysisResult {
    /// Result carrying a model's answer
    pub fn success(
        mode: AnalysisMode,
        content: impl Into<String>,
        source_model: impl Into<String>,
    ) -> Self {
        Self {
            title: mode.title().to_string(),
            content: content.into(),
            source_model: Some(source_model.into()),
        }
    }

    /// Result carrying an aggregated failure report
    pub fn failure(report: impl Into<String>) -> Self {
        Self {
            title: FAILURE_TITLE.to_string(),
            content: report.into(),
            source_model: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.source_model.is_some()
    }
}
