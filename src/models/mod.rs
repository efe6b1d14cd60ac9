//! Data Models
//!
//! Analysis results and settings.

pub mod analysis;
pub mod settings;

pub use analysis::{AnalysisResult, FAILURE_TITLE};
pub use settings::{AppConfig, SettingsUpdate, API_KEY_ENV, DEFAULT_MODELS};
