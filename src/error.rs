use thiserror::Error;

use crate::pipeline::StageKind;

/// Failures talking to the capability gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to reach the capability gateway at {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("gateway handshake did not complete within {secs}s")]
    HandshakeTimeout { secs: u64 },

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway returned JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed gateway response: {0}")]
    Malformed(String),

    #[error("capability '{name}' is not granted to this stage")]
    UnknownCapability { name: String },

    #[error("capability '{name}' exceeded its call budget of {limit} for this stage")]
    BudgetExhausted { name: String, limit: u32 },
}

/// Failures of a single agent invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Completion(#[from] anyhow::Error),

    #[error("capability call failed: {0}")]
    Capability(#[from] GatewayError),

    #[error("no final answer after {0} tool-use turns")]
    TurnsExhausted(u32),

    #[error("completion service returned an empty response")]
    EmptyResponse,
}

/// Top-level failure taxonomy for one research run. Everything a run can
/// die of is converted into one of these before it reaches the user.
#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("the session has no capability gateway; research cannot start")]
    NotInitialized,

    #[error("capability gateway initialization failed: {0}")]
    Initialization(#[source] GatewayError),

    #[error("{stage} stage failed: {source}")]
    Invocation {
        stage: StageKind,
        #[source]
        source: InvokeError,
    },

    #[error("{stage} stage did not finish within {secs}s")]
    Deadline { stage: StageKind, secs: u64 },
}

impl ResearchError {
    /// Stable name surfaced in the user-facing failure message.
    pub fn kind(&self) -> &'static str {
        match self {
            ResearchError::NotInitialized => "NotInitialized",
            ResearchError::Initialization(_) => "Initialization",
            ResearchError::Invocation { .. } => "Invocation",
            ResearchError::Deadline { .. } => "Deadline",
        }
    }
}
