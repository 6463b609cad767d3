//! Configuration management for the scout research assistant.
//!
//! This module provides a layered configuration system:
//! - JSON file at `~/.scout/config`
//! - Environment variable overrides
//! - Builder pattern for programmatic configuration
//! - Validation of the two required secrets at startup

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, GatewaySettings, LlmSettings, ModelSettings, PipelineSettings};

#[cfg(test)]
mod tests;
