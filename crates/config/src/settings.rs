//! Process settings
//!
//! Loaded once at startup from defaults layered with `SUPPORT_AGENT_*`
//! environment variables, e.g. `SUPPORT_AGENT_DEFAULT_PERSONA=joseph`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// Startup configuration for the service
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Persona id used when a turn names none
    pub default_persona: String,
    /// Optional YAML file of persona records merged over the builtins
    #[serde(default)]
    pub persona_file: Option<PathBuf>,
    /// Parameter name holding the upstream agent id
    pub agent_id_param: String,
    /// Parameter name holding the upstream agent alias
    pub agent_alias_param: String,
    /// Upstream conversational-agent endpoint
    pub agent_endpoint: String,
    /// Upstream invocation deadline (seconds)
    pub agent_timeout_secs: u64,
    /// HTTP listen address
    pub bind_addr: String,
}

impl Settings {
    /// Load settings from defaults + environment
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = config::Config::builder()
            .set_default("default_persona", crate::constants::FALLBACK_PERSONA_ID)?
            .set_default("agent_id_param", "SUPERVISOR_AGENT_ID")?
            .set_default("agent_alias_param", "SUPERVISOR_AGENT_ALIAS")?
            .set_default("agent_endpoint", "")?
            .set_default(
                "agent_timeout_secs",
                crate::constants::timeouts::UPSTREAM_AGENT_SECS as i64,
            )?
            .set_default("bind_addr", "0.0.0.0:8080")?
            .add_source(config::Environment::with_prefix("SUPPORT_AGENT"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}
