//! Prompt Catalog
//!
//! Per-mode instruction templates and the fixed frame the source code is
//! interpolated into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::mode::AnalysisMode;

/// Shared instructions prepended to every mode template
pub const DEFAULT_PREAMBLE: &str = "Respond in the style of a professional AI assistant. \
Use rich Markdown formatting. \
Split the answer into logical blocks: Introduction, Analysis, Summary.";

const EXPLAIN_TEMPLATE: &str = "Explain the logic of this code STEP BY STEP.";
const FIND_ISSUES_TEMPLATE: &str =
    "Find vulnerabilities and bugs. Present them as a list ordered by priority.";
const REFACTOR_TEMPLATE: &str =
    "Propose a thorough refactoring that follows current best practices.";

/// Prompt templates keyed by analysis mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptCatalog {
    /// Instructions shared by all modes
    pub preamble: String,
    /// Language the model should answer in (e.g. "Russian")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_language: Option<String>,
    /// Mode-specific instruction
    templates: HashMap<AnalysisMode, String>,
}

impl Default for PromptCatalog {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(AnalysisMode::Explain, EXPLAIN_TEMPLATE.to_string());
        templates.insert(AnalysisMode::FindIssues, FIND_ISSUES_TEMPLATE.to_string());
        templates.insert(AnalysisMode::Refactor, REFACTOR_TEMPLATE.to_string());
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            response_language: None,
            templates,
        }
    }
}

impl PromptCatalog {
    /// Set the response language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.response_language = Some(language.into());
        self
    }

    /// Replace the template for one mode
    pub fn with_template(mut self, mode: AnalysisMode, template: impl Into<String>) -> Self {
        self.templates.insert(mode, template.into());
        self
    }

    /// Template for `mode`, or the explain template when none is registered.
    pub fn template(&self, mode: AnalysisMode) -> &str {
        self.templates
            .get(&mode)
            .or_else(|| self.templates.get(&AnalysisMode::Explain))
            .map(String::as_str)
            .unwrap_or(EXPLAIN_TEMPLATE)
    }

    /// Build the full instruction sent to the model.
    pub fn instruction(&self, source: &str, mode: AnalysisMode) -> String {
        let mut preamble = self.preamble.clone();
        if let Some(language) = &self.response_language {
            preamble.push_str(&format!(" Answer in {}.", language));
        }
        format!(
            "{}\n{}\n\nCODE TO ANALYZE:\n```\n{}\n```",
            preamble,
            self.template(mode),
            source
        )
    }
}
