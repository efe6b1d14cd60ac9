//! Diagnostic tracing for the command-line binary.
//!
//! Attempt-by-attempt progress of the fallback chain is logged through
//! `tracing`; this module installs the stderr subscriber that displays it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `code_intel=info` so each attempt is visible
/// while the analysis is pending. Output goes to stderr so stdout carries only
/// the result.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,code_intel=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
