//! Transport-independent turn shapes
//!
//! The orchestrator consumes a [`TurnRequest`] and produces a
//! [`TurnResponse`]; the enclosing transport (HTTP, bot channel, test
//! harness) owns session persistence and only carries the string-keyed
//! session-attribute map between turns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Recognized session-attribute keys
pub mod attr_keys {
    pub const PERSONA_ID: &str = "persona_id";
    /// Cumulative frustration tally carried across turns (stringified integer)
    pub const FRUSTRATION_COUNT: &str = "frustration_count";
    /// Cumulative failed troubleshooting steps (stringified integer)
    pub const FAILED_STEPS: &str = "failed_steps";
    /// `"true"` marks a health-check invocation
    pub const TEST: &str = "test";
    pub const ESCALATION_REQUESTED: &str = "escalation_requested";
    pub const ESCALATION_REASON: &str = "escalation_reason";
    pub const ESCALATION_PRIORITY: &str = "escalation_priority";
}

/// Inbound conversation turn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub session_id: String,
    #[serde(default)]
    pub input_transcript: String,
    #[serde(default)]
    pub session_state: SessionState,
}

/// Inbound session state: only the attribute map matters to this core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
}

/// Outbound conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub session_state: ResponseSessionState,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSessionState {
    pub dialog_action: DialogAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub session_attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: DialogActionType,
}

/// Whether the dialog keeps eliciting input or ends the automated flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogActionType {
    Continue,
    Close,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub state: String,
}

/// One output message of a rendered response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "speech-markup")]
    SpeechMarkup,
}

/// Result of one upstream conversational-agent invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReply {
    pub output_text: String,
    pub session_id: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Parse an integer session attribute, defaulting to 0 when the key is
/// absent or the value is not a number
pub fn get_int_attr(attrs: &HashMap<String, String>, key: &str) -> i64 {
    attrs
        .get(key)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
