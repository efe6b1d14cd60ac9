//! Code Intel
//!
//! Code analysis backed by a ranked list of generative models. This crate
//! provides:
//! - The model fallback chain (`services::fallback`)
//! - The per-mode analysis session (`services::session`)
//! - Configuration storage (`storage`)
//! - Data models and utilities

pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use code_intel_llm::{build_http_client, AttemptExecutor, GeminiExecutor};

pub use code_intel_core::{AnalysisMode, AttemptOutcome, FailureReason};
pub use models::{AnalysisResult, AppConfig, SettingsUpdate};
pub use services::{AnalysisSession, ModelFallbackChain};
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};

/// Build a fallback chain backed by the Gemini executor from `config`
pub fn build_chain(config: &AppConfig) -> AppResult<ModelFallbackChain> {
    config.validate().map_err(AppError::validation)?;
    let client = build_http_client(config.proxy.as_deref())
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))?;
    let executor: Arc<dyn AttemptExecutor> =
        Arc::new(GeminiExecutor::with_client(config.executor_settings(), client));
    Ok(ModelFallbackChain::new(config.models.iter().cloned(), executor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chain_uses_configured_order() {
        let config = AppConfig {
            models: vec!["b".to_string(), "a".to_string()],
            ..Default::default()
        };
        let chain = build_chain(&config).unwrap();
        assert_eq!(chain.candidates(), &["b", "a"]);
    }

    #[test]
    fn test_build_chain_rejects_invalid_config() {
        let config = AppConfig {
            models: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(build_chain(&config), Err(AppError::Validation(_))));

        let config = AppConfig {
            proxy: Some("http://[::1".to_string()),
            ..Default::default()
        };
        assert!(matches!(build_chain(&config), Err(AppError::Config(_))));
    }
}
