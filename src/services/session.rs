//! Analysis Session
//!
//! Caller-side state: the latest result for each mode, kept in memory for the
//! life of the session.

use std::collections::HashMap;

use code_intel_core::AnalysisMode;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::analysis::AnalysisResult;
use crate::services::fallback::ModelFallbackChain;

/// Runs analyses and remembers the latest result per mode
#[derive(Debug)]
pub struct AnalysisSession {
    chain: ModelFallbackChain,
    results: RwLock<HashMap<AnalysisMode, AnalysisResult>>,
}

impl AnalysisSession {
    pub fn new(chain: ModelFallbackChain) -> Self {
        Self {
            chain,
            results: RwLock::new(HashMap::new()),
        }
    }

    pub fn chain(&self) -> &ModelFallbackChain {
        &self.chain
    }

    /// Analyze `source` and cache the result under the resolved mode.
    ///
    /// Returns `None` without contacting any model when `source` is blank.
    pub async fn analyze(&self, source: &str, mode: &str) -> Option<AnalysisResult> {
        if source.trim().is_empty() {
            debug!("Skipping analysis of empty source");
            return None;
        }

        let mode = AnalysisMode::parse_lenient(mode);
        let (result, _log) = self.chain.analyze_with_log(source, mode).await;
        self.results.write().await.insert(mode, result.clone());
        Some(result)
    }

    /// Latest cached result for `mode`
    pub async fn result(&self, mode: AnalysisMode) -> Option<AnalysisResult> {
        self.results.read().await.get(&mode).cloned()
    }

    /// Drop all cached results
    pub async fn clear(&self) {
        self.results.write().await.clear();
    }
}
