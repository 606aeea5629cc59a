//! Configuration for the support voice agent
//!
//! Provides:
//! - [`Settings`] loaded from defaults layered with environment variables
//! - centralized [`constants`]
//! - the lazily-filled upstream agent identity cache ([`AgentConfigCache`])

pub mod agent_params;
pub mod constants;
mod error;
mod settings;

pub use agent_params::{AgentConfigCache, AgentIdentity, EnvParameterSource, ParameterSource};
pub use error::ConfigError;
pub use settings::Settings;
