//! Code Intel LLM
//!
//! The attempt executor: one bounded-time request to one candidate model,
//! classified into an `AttemptOutcome`.
//!
//! Also includes the HTTP client factory.

pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod types;

// Re-export main types
pub use gemini::{GeminiExecutor, GeminiSettings, DEFAULT_ATTEMPT_TIMEOUT, GEMINI_API_URL};
pub use http_client::build_http_client;
pub use provider::{classify_http_failure, AttemptExecutor};
pub use types::*;
