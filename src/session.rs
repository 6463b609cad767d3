use crate::config::GatewaySettings;
use crate::error::GatewayError;
use crate::gateway::ToolGateway;

/// Explicit per-conversation context. Created once at chat start and
/// passed into every message-handling call; holds the only shared
/// resource of a session, the gateway connection.
///
/// A session whose connect failed stays usable: every message is then
/// rejected fast with a not-initialized error instead of attempting a
/// partial-capability pipeline run.
pub struct ResearchSession {
    gateway: Option<ToolGateway>,
}

impl ResearchSession {
    pub async fn connect(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        let gateway = ToolGateway::connect(settings).await?;
        Ok(Self {
            gateway: Some(gateway),
        })
    }

    /// A session without a gateway.
    pub fn detached() -> Self {
        Self { gateway: None }
    }

    pub fn gateway(&self) -> Option<&ToolGateway> {
        self.gateway.as_ref()
    }
}

#[cfg(test)]
impl ResearchSession {
    pub(crate) fn with_gateway(gateway: ToolGateway) -> Self {
        Self {
            gateway: Some(gateway),
        }
    }
}
