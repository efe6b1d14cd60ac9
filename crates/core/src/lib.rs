//! Code Intel Core
//!
//! Domain types shared by the executor and orchestrator crates. This crate
//! performs no I/O.
//!
//! ## Module Organization
//!
//! - `mode` - Analysis modes (`AnalysisMode`) and their result titles
//! - `prompt` - Prompt templates and instruction framing (`PromptCatalog`)
//! - `outcome` - Per-attempt outcome taxonomy (`AttemptOutcome`, `FailureReason`)

pub mod mode;
pub mod outcome;
pub mod prompt;

pub use mode::AnalysisMode;
pub use outcome::{AttemptOutcome, FailureReason};
pub use prompt::{PromptCatalog, DEFAULT_PREAMBLE};
