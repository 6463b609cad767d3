use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::client::verbose_log;
use crate::config::PipelineSettings;
use crate::error::ResearchError;
use crate::gateway::MeteredGateway;
use crate::invoker::{AgentCall, AgentRunner};
use crate::session::ResearchSession;

use super::context::{ResearchContext, ResearchRun, RunEvent, RunOutcome};
use super::progress::{
    COMPLETION_NOTICE, ChatSink, STATUS_FAILED, STATUS_STARTING, format_report, render_failure,
    stage_done_status,
};
use super::stages::{ResearchStage, standard_stages};
use super::types::StageKind;

/// Sequences the four fixed stages for one message, under one per-stage
/// deadline, with an all-or-nothing failure policy.
pub struct ResearchPipeline {
    runner: Arc<dyn AgentRunner>,
    stages: Vec<Box<dyn ResearchStage>>,
    stage_timeout: Duration,
}

impl ResearchPipeline {
    pub fn new(runner: Arc<dyn AgentRunner>, settings: &PipelineSettings) -> Self {
        Self {
            runner,
            stages: standard_stages(),
            stage_timeout: Duration::from_secs(settings.stage_timeout_secs),
        }
    }

    /// Run one research query to completion, emitting progress and the
    /// final report (or one failure message) through the sink.
    pub async fn handle_message(
        &self,
        session: &ResearchSession,
        query: &str,
        sink: &mut dyn ChatSink,
    ) -> ResearchRun {
        let mut events = Vec::new();

        let Some(gateway) = session.gateway() else {
            let error = ResearchError::NotInitialized;
            sink.message(&render_failure(&error));
            return ResearchRun {
                query: query.to_string(),
                events,
                outcome: RunOutcome::Failed { stage: None, error },
            };
        };

        sink.status(STATUS_STARTING);
        let mut context = ResearchContext::new(query);

        for stage in &self.stages {
            let kind = stage.kind();
            events.push(RunEvent::StageStarted(kind));

            let input = stage.compose_input(&context);
            let grants = stage.capability_grants();
            let metered = (!grants.is_empty()).then(|| MeteredGateway::new(gateway, grants));

            let call = AgentCall {
                instructions: stage.instructions(),
                input: &input,
                max_turns: stage.turn_budget(),
                capabilities: metered.as_ref(),
            };

            let output = match timeout(self.stage_timeout, self.runner.run_agent(call)).await {
                Ok(Ok(output)) => output,
                Ok(Err(source)) => {
                    let error = ResearchError::Invocation { stage: kind, source };
                    return Self::failed(query, events, kind, error, sink);
                }
                Err(_) => {
                    let error = ResearchError::Deadline {
                        stage: kind,
                        secs: self.stage_timeout.as_secs(),
                    };
                    return Self::failed(query, events, kind, error, sink);
                }
            };

            // Completed stage outputs stay visible to operators even when
            // a later stage fails.
            verbose_log(&format!("{kind} stage output"), &output);

            context.record(kind, output);
            events.push(RunEvent::StageCompleted(kind));
            sink.status(stage_done_status(kind));
        }

        let report = context
            .output(StageKind::Report)
            .unwrap_or_default()
            .to_string();

        sink.message(&format_report(query, &report));
        sink.message(COMPLETION_NOTICE);

        ResearchRun {
            query: query.to_string(),
            events,
            outcome: RunOutcome::Completed { report },
        }
    }

    fn failed(
        query: &str,
        mut events: Vec<RunEvent>,
        stage: StageKind,
        error: ResearchError,
        sink: &mut dyn ChatSink,
    ) -> ResearchRun {
        events.push(RunEvent::StageFailed(stage));
        sink.status(STATUS_FAILED);
        sink.message(&render_failure(&error));
        ResearchRun {
            query: query.to_string(),
            events,
            outcome: RunOutcome::Failed {
                stage: Some(stage),
                error,
            },
        }
    }
}
