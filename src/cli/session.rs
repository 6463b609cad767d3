use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;

use crate::client::AIClient;
use crate::config::Config;
use crate::error::ResearchError;
use crate::invoker::AgentInvoker;
use crate::pipeline::{ChatSink, GREETING, ResearchPipeline, render_failure};
use crate::session::ResearchSession;

/// Prints status updates dimmed and whole messages plainly.
pub(crate) struct ConsoleSink;

impl ChatSink for ConsoleSink {
    fn status(&mut self, text: &str) {
        println!("{}", text.dimmed());
    }

    fn message(&mut self, text: &str) {
        println!("\n{text}\n");
    }
}

fn build_pipeline(config: &Config) -> Result<ResearchPipeline> {
    let client = AIClient::new(&config.llm)?;
    let runner = Arc::new(AgentInvoker::new(client, &config.models));
    Ok(ResearchPipeline::new(runner, &config.pipeline))
}

/// Connect the session gateway once. A failed connect leaves the session
/// detached; every later message then fails fast instead of running a
/// partial pipeline.
async fn start_session(config: &Config, sink: &mut dyn ChatSink) -> ResearchSession {
    match ResearchSession::connect(&config.gateway).await {
        Ok(session) => session,
        Err(error) => {
            sink.message(&render_failure(&ResearchError::Initialization(error)));
            ResearchSession::detached()
        }
    }
}

pub(crate) async fn run_once(config: &Config, query: &str) -> Result<()> {
    let pipeline = build_pipeline(config)?;
    let mut sink = ConsoleSink;
    let session = start_session(config, &mut sink).await;

    let run = pipeline.handle_message(&session, query, &mut sink).await;
    if run.succeeded() {
        Ok(())
    } else {
        Err(anyhow!("research did not complete"))
    }
}

pub(crate) async fn run_interactive(config: &Config) -> Result<()> {
    let pipeline = build_pipeline(config)?;
    let mut sink = ConsoleSink;

    sink.message(GREETING);
    let session = start_session(config, &mut sink).await;

    loop {
        print!("{} ", "🔍 >".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query, "exit" | "quit") {
            break;
        }

        pipeline.handle_message(&session, query, &mut sink).await;
    }

    println!("👋 Goodbye!");
    Ok(())
}
