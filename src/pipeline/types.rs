use std::fmt;

/// The four fixed pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Search,
    Deepen,
    Enhance,
    Report,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Search => "Search",
            StageKind::Deepen => "Deepen",
            StageKind::Enhance => "Enhance",
            StageKind::Report => "Report",
        };
        write!(f, "{name}")
    }
}
