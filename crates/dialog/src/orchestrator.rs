//! Turn orchestration
//!
//! Composes the persona registry, escalation classifier, response renderer,
//! and upstream agent into the per-turn state machine. Every branch is
//! terminal; the only state carried between turns is the session-attribute
//! map owned by the transport.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use support_agent_config::constants::{phrases, timeouts};
use support_agent_config::AgentConfigCache;
use support_agent_core::turn::attr_keys;
use support_agent_core::{default_persona, get_int_attr, Persona, TurnRequest, TurnResponse};
use support_agent_persona::{resolve_persona_id, PersonaStore};

use crate::agent::ConversationalAgent;
use crate::escalation::classify;
use crate::response::{
    error_response, escalation_response, health_check_response, success_response, welcome_response,
};

/// Handles one conversation turn end to end
pub struct TurnHandler {
    store: Arc<dyn PersonaStore>,
    agent: Arc<dyn ConversationalAgent>,
    agent_config: Arc<AgentConfigCache>,
    default_persona_id: Option<String>,
}

impl TurnHandler {
    pub fn new(
        store: Arc<dyn PersonaStore>,
        agent: Arc<dyn ConversationalAgent>,
        agent_config: Arc<AgentConfigCache>,
        default_persona_id: Option<String>,
    ) -> Self {
        Self {
            store,
            agent,
            agent_config,
            default_persona_id,
        }
    }

    /// Process one turn
    ///
    /// Registry and collaborator failures are absorbed into degraded
    /// responses; this function itself cannot fail.
    pub async fn handle_turn(
        &self,
        request: &TurnRequest,
        explicit_persona_id: Option<&str>,
    ) -> TurnResponse {
        let attrs = &request.session_state.session_attributes;

        // Health-check invocations short-circuit before anything else
        if request.input_transcript.is_empty()
            && attrs.get(attr_keys::TEST).map(String::as_str) == Some("true")
        {
            return health_check_response();
        }

        let persona = self.load_persona(explicit_persona_id, request).await;

        // Empty transcript: opening dialog hook or failed transcription
        if request.input_transcript.is_empty() {
            info!(session_id = %request.session_id, "empty transcript, returning welcome prompt");
            return welcome_response(&persona, attrs.clone());
        }

        let decision = classify(
            &request.input_transcript,
            get_int_attr(attrs, attr_keys::FRUSTRATION_COUNT),
            get_int_attr(attrs, attr_keys::FAILED_STEPS),
        );
        if decision.should_escalate {
            info!(
                session_id = %request.session_id,
                reason = decision.reason.as_str(),
                priority = decision.priority.as_str(),
                "escalating to human agent"
            );
            return escalation_response(&persona, &decision, attrs.clone());
        }

        let Some(identity) = self.agent_config.resolve().await else {
            return success_response(&persona, phrases::CONFIGURING, attrs.clone());
        };

        match self
            .invoke_agent(&request.session_id, &request.input_transcript, &persona)
            .await
        {
            Ok(output_text) => {
                info!(
                    session_id = %request.session_id,
                    agent_id = %identity.agent_id,
                    "upstream agent replied"
                );
                success_response(&persona, &output_text, attrs.clone())
            }
            Err(e) => {
                warn!(session_id = %request.session_id, error = %e, "upstream agent call failed");
                error_response(&persona, phrases::TROUBLE_CONNECTING)
            }
        }
    }

    async fn invoke_agent(
        &self,
        session_id: &str,
        utterance: &str,
        persona: &Persona,
    ) -> Result<String, crate::DialogError> {
        let reply = self.agent.invoke(session_id, utterance, persona).await?;
        Ok(reply.output_text)
    }

    /// Resolve the persona id and load the record, substituting the fixed
    /// default persona on any lookup failure
    async fn load_persona(
        &self,
        explicit_persona_id: Option<&str>,
        request: &TurnRequest,
    ) -> Persona {
        let persona_id = resolve_persona_id(
            explicit_persona_id,
            &request.session_state.session_attributes,
            self.default_persona_id.as_deref(),
        );

        let lookup = tokio::time::timeout(
            Duration::from_secs(timeouts::PERSONA_LOOKUP_SECS),
            self.store.load(&persona_id),
        )
        .await;

        match lookup {
            Ok(Ok(persona)) => persona,
            Ok(Err(e)) => {
                warn!(persona_id, error = %e, "persona lookup failed, using default");
                default_persona()
            }
            Err(_) => {
                warn!(persona_id, "persona lookup timed out, using default");
                default_persona()
            }
        }
    }
}
