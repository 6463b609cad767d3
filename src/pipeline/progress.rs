use crate::error::ResearchError;

use super::types::StageKind;

/// Outbound interface of one conversation: a status line updated in
/// place, and whole messages (report, completion notice, errors).
/// Notifications are fire-and-forget; the pipeline never waits on them.
pub trait ChatSink: Send {
    fn status(&mut self, text: &str);
    fn message(&mut self, text: &str);
}

pub const GREETING: &str =
    "Hello! I'm your research assistant. What would you like to research today?";

pub const STATUS_STARTING: &str = "🚀 Starting research. Step 1/4: scanning for relevant sources";

pub const STATUS_FAILED: &str = "❌ Research failed. See the error details below.";

pub const COMPLETION_NOTICE: &str =
    "✅ Research completed. Ask a follow-up question or start a new query.";

/// Status text after a stage completes; also announces the next step so
/// the single status line always shows where the run stands.
pub fn stage_done_status(stage: StageKind) -> &'static str {
    match stage {
        StageKind::Search => "✅ Step 1/4 complete: sources identified. 📚 Step 2/4: reading the key sources",
        StageKind::Deepen => "✅ Step 2/4 complete: detailed findings extracted. ✨ Step 3/4: clarifying the findings",
        StageKind::Enhance => "✅ Step 3/4 complete: findings clarified. 📝 Step 4/4: compiling the report",
        StageKind::Report => "✅ Step 4/4 complete: report ready.",
    }
}

pub fn format_report(query: &str, body: &str) -> String {
    format!("# Research Report: {query}\n\n{body}")
}

/// The one user-facing failure message: error kind, error text, and the
/// fixed remediation checklist.
pub fn render_failure(error: &ResearchError) -> String {
    format!(
        "❌ The research run failed.\n\n\
         Error type: {}\n\
         Error message: {}\n\n\
         What you can try:\n\
         1. Check that the capability gateway and the completion service are reachable\n\
         2. Verify the API keys in your configuration\n\
         3. Rephrase your query and try again\n\
         4. Start a fresh session and retry",
        error.kind(),
        error,
    )
}
