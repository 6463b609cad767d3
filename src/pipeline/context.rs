use crate::error::ResearchError;

use super::types::StageKind;

/// Mutable state threaded through one run: the original query plus the
/// output of every completed stage. Discarded when the run ends.
#[derive(Debug)]
pub struct ResearchContext {
    pub query: String,
    outputs: Vec<(StageKind, String)>,
}

impl ResearchContext {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            outputs: Vec::new(),
        }
    }

    pub fn record(&mut self, stage: StageKind, output: String) {
        self.outputs.push((stage, output));
    }

    pub fn output(&self, stage: StageKind) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(kind, _)| *kind == stage)
            .map(|(_, output)| output.as_str())
    }
}

/// Audit events recorded while progressing through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    StageStarted(StageKind),
    StageCompleted(StageKind),
    StageFailed(StageKind),
}

/// The result of handling one message.
#[derive(Debug)]
pub struct ResearchRun {
    pub query: String,
    pub events: Vec<RunEvent>,
    pub outcome: RunOutcome,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed {
        report: String,
    },
    Failed {
        /// The stage that was active, or `None` when no stage started.
        stage: Option<StageKind>,
        error: ResearchError,
    },
}

impl ResearchRun {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { .. })
    }
}
