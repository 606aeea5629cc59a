//! End-to-end turn handling with mock collaborators

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use support_agent_config::{AgentConfigCache, ConfigError, ParameterSource};
use support_agent_core::turn::attr_keys;
use support_agent_core::{
    AgentReply, ContentType, DialogActionType, Persona, SessionState, TurnRequest,
};
use support_agent_dialog::{ConversationalAgent, DialogError, TurnHandler};
use support_agent_persona::{MemoryPersonaStore, PersonaStore};

struct FixedParams {
    agent_id: &'static str,
    agent_alias: &'static str,
}

#[async_trait]
impl ParameterSource for FixedParams {
    async fn get(&self, name: &str) -> Result<String, ConfigError> {
        match name {
            "agent_id" => Ok(self.agent_id.to_string()),
            "agent_alias" => Ok(self.agent_alias.to_string()),
            _ => Err(ConfigError::ParameterNotFound(name.to_string())),
        }
    }
}

enum MockBehavior {
    Reply(&'static str),
    Fail,
}

struct MockAgent {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockAgent {
    fn replying(text: &'static str) -> Self {
        Self {
            behavior: MockBehavior::Reply(text),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConversationalAgent for MockAgent {
    async fn invoke(
        &self,
        session_id: &str,
        _utterance: &str,
        _persona: &Persona,
    ) -> Result<AgentReply, DialogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Reply(text) => Ok(AgentReply {
                output_text: text.to_string(),
                session_id: session_id.to_string(),
                metadata: HashMap::new(),
            }),
            MockBehavior::Fail => Err(DialogError::Agent("connection refused".to_string())),
        }
    }
}

fn ready_config() -> Arc<AgentConfigCache> {
    Arc::new(AgentConfigCache::new(
        Arc::new(FixedParams {
            agent_id: "AGENT123",
            agent_alias: "prod",
        }),
        "agent_id",
        "agent_alias",
    ))
}

fn unprovisioned_config() -> Arc<AgentConfigCache> {
    Arc::new(AgentConfigCache::new(
        Arc::new(FixedParams {
            agent_id: "PLACEHOLDER",
            agent_alias: "prod",
        }),
        "agent_id",
        "agent_alias",
    ))
}

fn handler(agent: Arc<MockAgent>, config: Arc<AgentConfigCache>) -> TurnHandler {
    TurnHandler::new(
        Arc::new(MemoryPersonaStore::with_builtins()),
        agent,
        config,
        Some("tangerine".to_string()),
    )
}

fn request(transcript: &str, attrs: &[(&str, &str)]) -> TurnRequest {
    TurnRequest {
        session_id: "session-1".to_string(),
        input_transcript: transcript.to_string(),
        session_state: SessionState {
            session_attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        },
    }
}

#[tokio::test]
async fn explicit_human_request_escalates_without_agent_call() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent.clone(), ready_config());

    let req = request("I want to talk to a human, this is ridiculous", &[]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Close
    );
    let attrs = &response.session_state.session_attributes;
    assert_eq!(attrs.get("escalation_reason"), Some(&"user_requested".to_string()));
    assert_eq!(attrs.get("escalation_priority"), Some(&"high".to_string()));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn accumulated_frustration_escalates_medium() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent.clone(), ready_config());

    let req = request(
        "still not working",
        &[(attr_keys::FRUSTRATION_COUNT, "2")],
    );
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Close
    );
    let attrs = &response.session_state.session_attributes;
    assert_eq!(attrs.get("escalation_reason"), Some(&"user_frustrated".to_string()));
    assert_eq!(attrs.get("escalation_priority"), Some(&"medium".to_string()));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn escalation_preserves_unrelated_attributes() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent, ready_config());

    let req = request(
        "transfer me",
        &[("user_name", "John"), (attr_keys::PERSONA_ID, "joseph")],
    );
    let response = handler.handle_turn(&req, None).await;

    let attrs = &response.session_state.session_attributes;
    assert_eq!(attrs.get("user_name"), Some(&"John".to_string()));
    assert_eq!(attrs.get(attr_keys::PERSONA_ID), Some(&"joseph".to_string()));
    assert_eq!(attrs.get("escalation_requested"), Some(&"true".to_string()));
}

#[tokio::test]
async fn exhausted_troubleshooting_escalates() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent, ready_config());

    let req = request("okay what next", &[(attr_keys::FAILED_STEPS, "5")]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.session_attributes.get("escalation_reason"),
        Some(&"troubleshooting_exhausted".to_string())
    );
}

#[tokio::test]
async fn happy_path_wraps_agent_output_in_speech_markup() {
    let agent = Arc::new(MockAgent::replying("Let's check the cable."));
    let handler = handler(agent.clone(), ready_config());

    let req = request("my headset has no sound", &[("user_name", "John")]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Continue
    );
    assert_eq!(agent.call_count(), 1);

    let message = &response.messages[0];
    assert_eq!(message.content_type, ContentType::SpeechMarkup);
    assert!(message.content.starts_with("<speak><prosody"));
    assert!(message.content.ends_with("</prosody></speak>"));
    assert!(message.content.contains("check the cable"));

    // Attributes carried forward unchanged
    assert_eq!(
        response.session_state.session_attributes.get("user_name"),
        Some(&"John".to_string())
    );
}

#[tokio::test]
async fn agent_failure_degrades_to_error_response() {
    let agent = Arc::new(MockAgent::failing());
    let handler = handler(agent.clone(), ready_config());

    let req = request("my headset has no sound", &[("user_name", "John")]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Continue
    );
    assert!(response.messages[0].content.contains("trouble connecting"));
    // Error responses intentionally drop session attributes
    assert!(response.session_state.session_attributes.is_empty());
    // A single failure is not retried
    assert_eq!(agent.call_count(), 1);
}

#[tokio::test]
async fn unprovisioned_agent_yields_configuring_message() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent.clone(), unprovisioned_config());

    let req = request("my headset has no sound", &[]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Continue
    );
    assert!(response.messages[0].content.contains("being configured"));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn empty_transcript_with_test_flag_is_health_check() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent.clone(), ready_config());

    let req = request("", &[(attr_keys::TEST, "true")]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Close
    );
    let intent = response.session_state.intent.as_ref().unwrap();
    assert_eq!(intent.name, "health-check");
    assert_eq!(response.messages[0].content_type, ContentType::Text);
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn empty_transcript_returns_persona_welcome() {
    let agent = Arc::new(MockAgent::replying("unused"));
    let handler = handler(agent.clone(), ready_config());

    let req = request("", &[]);
    let response = handler.handle_turn(&req, None).await;

    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Continue
    );
    // Default persona id resolves to tangerine, whose greeting is used
    assert!(response.messages[0].content.contains("Tangerine"));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn unknown_persona_falls_back_to_default() {
    let agent = Arc::new(MockAgent::replying("All good."));
    let handler = handler(agent, ready_config());

    let req = request(
        "my headset has no sound",
        &[(attr_keys::PERSONA_ID, "who-is-this")],
    );
    let response = handler.handle_turn(&req, None).await;

    // Default persona prosody shows up in the markup
    assert!(response.messages[0]
        .content
        .contains(r#"<prosody rate="100%" pitch="medium">"#));
}

#[tokio::test]
async fn explicit_persona_id_overrides_session_attribute() {
    let agent = Arc::new(MockAgent::replying("All good."));
    let handler = handler(agent, ready_config());

    let req = request(
        "my headset has no sound",
        &[(attr_keys::PERSONA_ID, "tangerine")],
    );
    let response = handler.handle_turn(&req, Some("joseph")).await;

    // Joseph's prosody, not tangerine's
    assert!(response.messages[0]
        .content
        .contains(r#"<prosody rate="95%" pitch="low">"#));
}

#[tokio::test]
async fn garbage_counters_default_to_zero() {
    let agent = Arc::new(MockAgent::replying("Step one: check the cable."));
    let handler = handler(agent.clone(), ready_config());

    let req = request(
        "my headset has no sound",
        &[
            (attr_keys::FRUSTRATION_COUNT, "lots"),
            (attr_keys::FAILED_STEPS, ""),
        ],
    );
    let response = handler.handle_turn(&req, None).await;

    // No escalation fires; the turn proceeds to the agent
    assert_eq!(
        response.session_state.dialog_action.action_type,
        DialogActionType::Continue
    );
    assert_eq!(agent.call_count(), 1);
}
