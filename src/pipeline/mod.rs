//! The four-stage research pipeline.
//!
//! One user query runs Search → Deepen → Enhance → Report, strictly in
//! order, each stage an agent invocation whose input carries the original
//! query and every prior stage's output. The orchestrator applies one
//! catch-all failure policy: no retries, no partial reports.

mod context;
mod orchestrator;
mod progress;
mod prompts;
mod stages;
mod types;

#[allow(unused_imports)]
pub use context::{ResearchContext, ResearchRun, RunEvent, RunOutcome};
pub use orchestrator::ResearchPipeline;
#[allow(unused_imports)]
pub use progress::{
    COMPLETION_NOTICE, ChatSink, GREETING, STATUS_FAILED, STATUS_STARTING, format_report,
    render_failure, stage_done_status,
};
pub use types::StageKind;
