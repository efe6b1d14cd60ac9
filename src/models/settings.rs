//! Settings Models
//!
//! Application configuration and settings data structures.

use std::collections::HashMap;
use std::time::Duration;

use code_intel_core::{AnalysisMode, PromptCatalog};
use code_intel_llm::{GeminiSettings, GenerationParams, GEMINI_API_URL};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "CODE_INTEL_API_KEY";

/// Candidate models in priority order: fastest and most reliable first.
pub const DEFAULT_MODELS: [&str; 13] = [
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-3-flash",
    "gemma-3-27b",
    "gemma-3-12b",
    "gemma-3-4b",
    "gemma-3-2b",
    "gemma-3-1b",
    "gemini-1.5-flash",
    "gemini-1.5-flash-8b",
    "gemini-pro",
    "gemini-2.5-flash-tts",
    "gemini-robotics-er-1.5-preview",
];

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the Generative Language API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL the model id is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Candidate models, tried in order
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Deadline for a single attempt in milliseconds
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
    /// Temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Language the analysis should be written in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_language: Option<String>,
    /// Proxy URL for outbound requests (http, https, or socks5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Per-mode prompt template overrides
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub prompts: HashMap<AnalysisMode, String>,
}

fn default_base_url() -> String {
    GEMINI_API_URL.to_string()
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|s| s.to_string()).collect()
}

fn default_attempt_timeout_ms() -> u64 {
    10_000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    2500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            models: default_models(),
            attempt_timeout_ms: default_attempt_timeout_ms(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            response_language: None,
            proxy: None,
            prompts: HashMap::new(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub models: Option<Vec<String>>,
    pub attempt_timeout_ms: Option<u64>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub response_language: Option<String>,
    pub proxy: Option<String>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(key) = update.api_key {
            self.api_key = Some(key);
        }
        if let Some(base_url) = update.base_url {
            self.base_url = base_url;
        }
        if let Some(models) = update.models {
            self.models = models;
        }
        if let Some(timeout) = update.attempt_timeout_ms {
            self.attempt_timeout_ms = timeout;
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(max) = update.max_output_tokens {
            self.max_output_tokens = max;
        }
        if let Some(language) = update.response_language {
            self.response_language = Some(language);
        }
        if let Some(proxy) = update.proxy {
            self.proxy = Some(proxy);
        }
    }

    /// Replace the API key with `value` when it is set and non-blank
    pub fn apply_api_key_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match url::Url::parse(&self.base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(format!(
                    "Invalid base_url scheme: {}. Must be 'http' or 'https'",
                    parsed.scheme()
                ))
            }
            Err(e) => return Err(format!("Invalid base_url {}: {}", self.base_url, e)),
        }

        if self.models.is_empty() {
            return Err("models must list at least one candidate".to_string());
        }
        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err("models must not contain blank entries".to_string());
        }

        if self.attempt_timeout_ms == 0 {
            return Err("attempt_timeout_ms must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Invalid temperature: {}. Must be between 0.0 and 2.0",
                self.temperature
            ));
        }

        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Per-attempt deadline
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    /// Prompt catalog with the configured language and overrides applied
    pub fn prompt_catalog(&self) -> PromptCatalog {
        let mut catalog = PromptCatalog::default();
        if let Some(language) = &self.response_language {
            catalog = catalog.with_language(language.clone());
        }
        for (mode, template) in &self.prompts {
            catalog = catalog.with_template(*mode, template.clone());
        }
        catalog
    }

    /// Executor settings derived from this configuration
    pub fn executor_settings(&self) -> GeminiSettings {
        GeminiSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            attempt_timeout: self.attempt_timeout(),
            params: GenerationParams {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
            prompts: self.prompt_catalog(),
        }
    }

    /// Copy safe to print: the API key is masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api_key.is_some() {
            copy.api_key = Some("********".to_string());
        }
        copy
    }
}
