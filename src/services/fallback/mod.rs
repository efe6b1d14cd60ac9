//! Model Fallback Service
//!
//! Runs an analysis against a ranked list of models, falling back to the next
//! model whenever one fails.

mod chain;
mod report;

pub use chain::{FallbackAttempt, FallbackExecutionLog, ModelFallbackChain};
pub use report::render_failure_report;
