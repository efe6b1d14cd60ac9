//! Failure Report
//!
//! Markdown summary shown when no candidate produced an analysis.

use std::fmt::Write;

use super::chain::FallbackExecutionLog;

const RETRY_GUIDANCE: &str = "Please wait 1-5 minutes and try again.";

/// Render the aggregated failure report for an exhausted chain.
///
/// Lists each attempted model once, in attempt order, with its failure reason.
pub fn render_failure_report(log: &FallbackExecutionLog) -> String {
    if log.attempts.is_empty() {
        return format!(
            "⚠️ No candidate models are configured, so the analysis could not run.\n\n\
             Add at least one model to the configuration. {}",
            RETRY_GUIDANCE
        );
    }

    let mut report = format!(
        "⚠️ Unfortunately, all {} available models declined the request, \
         most likely because the shared API limits are exhausted.\n\n\
         **Attempts:**\n\n",
        log.attempts.len()
    );

    // Longest first so an id never matches inside a longer sibling id.
    let mut models: Vec<&str> = log.attempts.iter().map(|a| a.model.as_str()).collect();
    models.sort_by_key(|m| std::cmp::Reverse(m.len()));

    for (idx, attempt) in log.attempts.iter().enumerate() {
        let reason = attempt
            .failure_reason
            .map(|r| r.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let detail = attempt
            .error_message
            .as_deref()
            .map(|message| scrub_model_ids(&single_line(message), &attempt.model, &models))
            .unwrap_or_default();
        let _ = writeln!(
            report,
            "{}. `{}` ({}, {}ms): {}",
            idx + 1,
            attempt.model,
            reason,
            attempt.duration_ms,
            detail
        );
    }

    let _ = write!(report, "\n{}", RETRY_GUIDANCE);
    report
}

/// Collapse whitespace so multi-line upstream messages stay in one list item
fn single_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace model ids echoed by upstream messages (e.g. `models/<id> is not
/// found`) so each id appears in the report only as its own list entry.
fn scrub_model_ids(message: &str, own: &str, models: &[&str]) -> String {
    let mut scrubbed = message.to_string();
    for model in models.iter().filter(|m| !m.is_empty()) {
        let phrase = if *model == own {
            "this model"
        } else {
            "another model"
        };
        scrubbed = scrubbed
            .replace(&format!("models/{}", model), phrase)
            .replace(model, phrase);
    }
    scrubbed
}
