use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::client::verbose_log;
use crate::error::GatewayError;

use super::{ToolDescriptor, ToolGateway};

/// Per-stage view of the gateway: only the granted capabilities are
/// visible, and each carries a hard call ceiling. The ceiling is checked
/// before the call leaves the process, so a runaway agent cannot exceed
/// its budget no matter what its instructions say.
pub struct MeteredGateway<'a> {
    gateway: &'a ToolGateway,
    granted: Vec<(ToolDescriptor, u32)>,
    used: Mutex<HashMap<String, u32>>,
}

impl<'a> MeteredGateway<'a> {
    pub fn new(gateway: &'a ToolGateway, grants: &[(&str, u32)]) -> Self {
        let mut granted = Vec::new();
        for &(name, limit) in grants {
            match gateway.tool(name) {
                Some(descriptor) => granted.push((descriptor.clone(), limit)),
                None => verbose_log(
                    "gateway",
                    &format!("granted capability '{name}' is not advertised by the provider"),
                ),
            }
        }

        Self {
            gateway,
            granted,
            used: Mutex::new(HashMap::new()),
        }
    }

    /// The capabilities visible to the agent for this stage.
    pub fn tools(&self) -> Vec<&ToolDescriptor> {
        self.granted.iter().map(|(descriptor, _)| descriptor).collect()
    }

    pub async fn call(&self, name: &str, arguments: Value) -> Result<String, GatewayError> {
        let Some((_, limit)) = self
            .granted
            .iter()
            .find(|(descriptor, _)| descriptor.name == name)
        else {
            return Err(GatewayError::UnknownCapability { name: name.to_string() });
        };

        {
            let mut used = self.used.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let count = used.entry(name.to_string()).or_insert(0);
            if *count >= *limit {
                return Err(GatewayError::BudgetExhausted {
                    name: name.to_string(),
                    limit: *limit,
                });
            }
            *count += 1;
        }

        self.gateway.call(name, arguments).await
    }
}
