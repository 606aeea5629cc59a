//! Support voice agent service
//!
//! Wires settings, the persona registry, the upstream agent client, and the
//! turn orchestrator into an HTTP front end.

mod routes;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use support_agent_config::{AgentConfigCache, EnvParameterSource, Settings};
use support_agent_dialog::{HttpAgentClient, TurnHandler};
use support_agent_persona::{MemoryPersonaStore, PersonaStore};

use routes::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("failed to load settings")?;
    info!(bind_addr = %settings.bind_addr, "starting support agent service");

    let store = MemoryPersonaStore::with_builtins();
    if let Some(path) = &settings.persona_file {
        let merged = store
            .merge_yaml_file(path)
            .with_context(|| format!("failed to load persona file {}", path.display()))?;
        info!(count = merged, "loaded persona records from file");
    }
    let store: Arc<dyn PersonaStore> = Arc::new(store);

    let agent = HttpAgentClient::new(
        settings.agent_endpoint.clone(),
        Duration::from_secs(settings.agent_timeout_secs),
    )
    .context("failed to build agent client")?;

    let agent_config = Arc::new(AgentConfigCache::new(
        Arc::new(EnvParameterSource),
        settings.agent_id_param.clone(),
        settings.agent_alias_param.clone(),
    ));

    let handler = TurnHandler::new(
        store.clone(),
        Arc::new(agent),
        agent_config,
        Some(settings.default_persona.clone()),
    );

    let app = router(Arc::new(AppState { handler, store }));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown handler");
        return;
    }
    info!("shutdown signal received");
}
