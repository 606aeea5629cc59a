//! Upstream conversational agent client
//!
//! The upstream agent is an opaque collaborator: text and persona context
//! in, text out. It is invoked at most once per turn, bounded by a deadline
//! that leaves a buffer under the platform timeout, and never retried here;
//! a failed call degrades to the error-response path.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use support_agent_core::{AgentReply, Persona};

use crate::error::DialogError;

/// Upstream conversational agent collaborator
#[async_trait]
pub trait ConversationalAgent: Send + Sync {
    /// Invoke the agent for one turn
    async fn invoke(
        &self,
        session_id: &str,
        utterance: &str,
        persona: &Persona,
    ) -> Result<AgentReply, DialogError>;
}

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    session_id: &'a str,
    input_text: &'a str,
    persona_id: &'a str,
    persona_name: &'a str,
    system_prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    output_text: String,
}

/// HTTP client for the upstream agent endpoint
pub struct HttpAgentClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpAgentClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DialogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DialogError::Agent(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }
}

#[async_trait]
impl ConversationalAgent for HttpAgentClient {
    async fn invoke(
        &self,
        session_id: &str,
        utterance: &str,
        persona: &Persona,
    ) -> Result<AgentReply, DialogError> {
        let request = InvokeRequest {
            session_id,
            input_text: utterance,
            persona_id: &persona.persona_id,
            persona_name: &persona.display_name,
            system_prompt: &persona.system_prompt,
        };

        debug!(session_id, persona_id = %persona.persona_id, "invoking upstream agent");

        let send = self.client.post(&self.endpoint).json(&request).send();
        let response = tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| {
                DialogError::AgentTimeout(format!(
                    "agent invocation timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| DialogError::Agent(format!("agent request failed: {e}")))?
            .error_for_status()
            .map_err(|e| DialogError::Agent(format!("agent returned error status: {e}")))?;

        let body: InvokeResponse = response
            .json()
            .await
            .map_err(|e| DialogError::Agent(format!("invalid agent response body: {e}")))?;

        let output_text = clean_reply(&body.output_text);
        if output_text.is_empty() {
            return Err(DialogError::EmptyAgentReply {
                session_id: session_id.to_string(),
            });
        }

        let mut metadata = HashMap::new();
        metadata.insert("persona_id".to_string(), persona.persona_id.clone());
        metadata.insert("persona_name".to_string(), persona.display_name.clone());

        Ok(AgentReply {
            output_text,
            session_id: session_id.to_string(),
            metadata,
        })
    }
}

/// Strip trailing JSON function-call artifacts some models append
pub fn clean_reply(reply: &str) -> String {
    const ARTIFACT_MARKERS: &[&str] = &[
        "\n{{\"name\":",
        "\n{\"name\":",
        " {{\"name\":",
        " {\"name\":",
        "{{\"name\":",
        "{\"name\":",
    ];

    for marker in ARTIFACT_MARKERS {
        if let Some(idx) = reply.find(marker) {
            return reply[..idx].trim().to_string();
        }
    }
    reply.trim().to_string()
}
