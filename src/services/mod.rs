//! Services
//!
//! Business logic: the model fallback chain and the caller-side session.

pub mod fallback;
pub mod session;

pub use fallback::{FallbackAttempt, FallbackExecutionLog, ModelFallbackChain};
pub use session::AnalysisSession;
