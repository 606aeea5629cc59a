//! Upstream agent identity cache
//!
//! The upstream agent id and alias live in a parameter store and are fetched
//! once per process. The cache takes an optimistic read first and falls back
//! to a single-flight fill: concurrent first users line up on one mutex, the
//! winner re-checks and fetches, everyone else reuses its result.
//!
//! Placeholder or empty values are returned to the caller but never marked
//! as loaded, so a deployment that has not been provisioned yet keeps
//! re-checking on later turns instead of caching the bad values forever.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::constants::PLACEHOLDER;
use crate::error::ConfigError;

/// Read access to an external parameter store
#[async_trait]
pub trait ParameterSource: Send + Sync {
    async fn get(&self, name: &str) -> Result<String, ConfigError>;
}

/// Parameter source backed by process environment variables
pub struct EnvParameterSource;

#[async_trait]
impl ParameterSource for EnvParameterSource {
    async fn get(&self, name: &str) -> Result<String, ConfigError> {
        std::env::var(name).map_err(|_| ConfigError::ParameterNotFound(name.to_string()))
    }
}

/// Resolved upstream agent identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    pub agent_id: String,
    pub agent_alias: String,
}

impl AgentIdentity {
    /// True when both values are present and not the provisioning sentinel
    pub fn is_ready(&self) -> bool {
        !self.agent_id.is_empty()
            && self.agent_id != PLACEHOLDER
            && !self.agent_alias.is_empty()
            && self.agent_alias != PLACEHOLDER
    }
}

/// Process-lifetime cache of the upstream agent identity
pub struct AgentConfigCache {
    source: Arc<dyn ParameterSource>,
    id_param: String,
    alias_param: String,
    cached: RwLock<Option<AgentIdentity>>,
    fill: tokio::sync::Mutex<()>,
}

impl AgentConfigCache {
    pub fn new(
        source: Arc<dyn ParameterSource>,
        id_param: impl Into<String>,
        alias_param: impl Into<String>,
    ) -> Self {
        Self {
            source,
            id_param: id_param.into(),
            alias_param: alias_param.into(),
            cached: RwLock::new(None),
            fill: tokio::sync::Mutex::new(()),
        }
    }

    /// Resolve the agent identity, fetching and caching it on first use
    ///
    /// Returns `None` when the parameters are unset or still hold the
    /// provisioning placeholder; that state is not cached.
    pub async fn resolve(&self) -> Option<AgentIdentity> {
        if let Some(identity) = self.cached.read().clone() {
            return Some(identity);
        }

        let _guard = self.fill.lock().await;

        // Another task may have filled the cache while we waited
        if let Some(identity) = self.cached.read().clone() {
            return Some(identity);
        }

        let identity = self.fetch().await?;
        if identity.is_ready() {
            info!(agent_id = %identity.agent_id, "loaded upstream agent identity");
            *self.cached.write() = Some(identity.clone());
            Some(identity)
        } else {
            warn!(
                agent_id = %identity.agent_id,
                agent_alias = %identity.agent_alias,
                "upstream agent not yet provisioned"
            );
            None
        }
    }

    async fn fetch(&self) -> Option<AgentIdentity> {
        let agent_id = match self.source.get(&self.id_param).await {
            Ok(v) => v,
            Err(e) => {
                warn!(param = %self.id_param, error = %e, "failed to read agent id parameter");
                return None;
            }
        };
        let agent_alias = match self.source.get(&self.alias_param).await {
            Ok(v) => v,
            Err(e) => {
                warn!(param = %self.alias_param, error = %e, "failed to read agent alias parameter");
                return None;
            }
        };
        Some(AgentIdentity {
            agent_id,
            agent_alias,
        })
    }
}
