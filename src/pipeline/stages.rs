use super::context::ResearchContext;
use super::prompts;
use super::types::StageKind;

/// Capability names as advertised by the firecrawl gateway.
pub const SEARCH_TOOL: &str = "firecrawl_search";
pub const SCRAPE_TOOL: &str = "firecrawl_scrape";

/// A stage descriptor: what to tell the agent, what it may call, and how
/// its input is composed from the run so far.
pub trait ResearchStage: Send + Sync {
    fn kind(&self) -> StageKind;

    /// Fixed completion round-trip budget for this stage.
    fn turn_budget(&self) -> u32;

    fn instructions(&self) -> &'static str;

    /// Capabilities this stage may use, each with a hard call ceiling.
    /// Empty means the stage runs without the gateway.
    fn capability_grants(&self) -> &'static [(&'static str, u32)];

    fn compose_input(&self, context: &ResearchContext) -> String;
}

pub struct SearchStage;

impl ResearchStage for SearchStage {
    fn kind(&self) -> StageKind {
        StageKind::Search
    }

    fn turn_budget(&self) -> u32 {
        3
    }

    fn instructions(&self) -> &'static str {
        prompts::SEARCH_INSTRUCTIONS
    }

    fn capability_grants(&self) -> &'static [(&'static str, u32)] {
        &[(SEARCH_TOOL, 1)]
    }

    fn compose_input(&self, context: &ResearchContext) -> String {
        format!("Conduct initial research on: {}", context.query)
    }
}

pub struct DeepenStage;

impl ResearchStage for DeepenStage {
    fn kind(&self) -> StageKind {
        StageKind::Deepen
    }

    fn turn_budget(&self) -> u32 {
        5
    }

    fn instructions(&self) -> &'static str {
        prompts::DEEPEN_INSTRUCTIONS
    }

    fn capability_grants(&self) -> &'static [(&'static str, u32)] {
        &[(SCRAPE_TOOL, 3)]
    }

    fn compose_input(&self, context: &ResearchContext) -> String {
        format!(
            "Based on the initial research findings for: {}\n\n\
             Initial findings:\n{}\n\n\
             Identify 2-3 key areas or URLs that require deeper investigation \
             and conduct deep research on those areas and sources.",
            context.query,
            context.output(StageKind::Search).unwrap_or_default(),
        )
    }
}

pub struct EnhanceStage;

impl ResearchStage for EnhanceStage {
    fn kind(&self) -> StageKind {
        StageKind::Enhance
    }

    fn turn_budget(&self) -> u32 {
        2
    }

    fn instructions(&self) -> &'static str {
        prompts::ENHANCE_INSTRUCTIONS
    }

    fn capability_grants(&self) -> &'static [(&'static str, u32)] {
        &[]
    }

    fn compose_input(&self, context: &ResearchContext) -> String {
        format!(
            "Enhance the following research findings for: {}\n\n\
             Initial research summary:\n{}\n\n\
             Deep research findings:\n{}\n\n\
             Enhance this research with additional explanations, examples, case \
             studies, and deeper insights while maintaining its accuracy.",
            context.query,
            context.output(StageKind::Search).unwrap_or_default(),
            context.output(StageKind::Deepen).unwrap_or_default(),
        )
    }
}

pub struct ReportStage;

impl ResearchStage for ReportStage {
    fn kind(&self) -> StageKind {
        StageKind::Report
    }

    fn turn_budget(&self) -> u32 {
        2
    }

    fn instructions(&self) -> &'static str {
        prompts::REPORT_INSTRUCTIONS
    }

    fn capability_grants(&self) -> &'static [(&'static str, u32)] {
        &[]
    }

    fn compose_input(&self, context: &ResearchContext) -> String {
        format!(
            "Generate a comprehensive research report for: {}\n\n\
             Initial research summary:\n{}\n\n\
             Deep research insights:\n{}\n\n\
             Enhanced content:\n{}\n\n\
             Create a professional, comprehensive report incorporating all of \
             this information.",
            context.query,
            context.output(StageKind::Search).unwrap_or_default(),
            context.output(StageKind::Deepen).unwrap_or_default(),
            context.output(StageKind::Enhance).unwrap_or_default(),
        )
    }
}

/// The fixed Search → Deepen → Enhance → Report sequence.
pub fn standard_stages() -> Vec<Box<dyn ResearchStage>> {
    vec![
        Box::new(SearchStage),
        Box::new(DeepenStage),
        Box::new(EnhanceStage),
        Box::new(ReportStage),
    ]
}
