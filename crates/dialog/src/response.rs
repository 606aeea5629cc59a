//! Response rendering
//!
//! Turns a persona, a message, and optionally an escalation decision into
//! the transport-independent [`TurnResponse`] shape. Persona phrase-bank
//! entries override the builtin escalation texts; the builtin table is
//! data-driven so adding a persona means adding a record, not a branch.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use support_agent_config::constants::phrases;
use support_agent_core::turn::attr_keys;
use support_agent_core::{
    ContentType, DialogAction, DialogActionType, EscalationDecision, EscalationReason, Intent,
    Message, Persona, PhraseKind, ResponseSessionState, TurnResponse,
};

use crate::ssml::build_ssml;

/// Intent reported on a transfer to a human
pub const ESCALATE_INTENT: &str = "escalate";

/// Intent reported on a health-check invocation
pub const HEALTH_CHECK_INTENT: &str = "health-check";

const FULFILLED: &str = "Fulfilled";

/// Per-reason escalation texts for one persona
struct EscalationPhrases {
    user_requested: &'static str,
    user_frustrated: &'static str,
    /// Used for exhaustion and any reason without a dedicated text
    fallback: &'static str,
}

impl EscalationPhrases {
    fn for_reason(&self, reason: EscalationReason) -> &'static str {
        match reason {
            EscalationReason::UserRequested => self.user_requested,
            EscalationReason::UserFrustrated => self.user_frustrated,
            _ => self.fallback,
        }
    }
}

/// Generic texts for personas without a dedicated record
static GENERIC_ESCALATION: EscalationPhrases = EscalationPhrases {
    user_requested: "Let me connect you with a specialist who can help you further.",
    user_frustrated: "Let me connect you with a specialist who can help you further.",
    fallback: "Let me connect you with a specialist who can help you further.",
};

static ESCALATION_TABLE: Lazy<HashMap<&'static str, EscalationPhrases>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        "tangerine",
        EscalationPhrases {
            user_requested: "No bother at all! Let me get you connected with one of our \
                             brilliant specialists who can help you out. Just one moment!",
            user_frustrated: "I'm so sorry this has been such a hassle for you. Let me get you \
                              through to someone who can sort this out properly. You're in \
                              good hands!",
            fallback: "Right so, we've tried a good few things here. Let me connect you with \
                       a specialist who might have some other tricks up their sleeve!",
        },
    );
    table.insert(
        "joseph",
        EscalationPhrases {
            user_requested: "Absolutely, I understand. Let me get you connected with a \
                             specialist. They'll take good care of you.",
            user_frustrated: "I hear you, and I'm sorry we haven't been able to resolve this \
                              yet. Let me transfer you to someone who can dig a little deeper \
                              into this issue.",
            fallback: "Alright, we've worked through quite a few steps here. I think it's \
                       time to bring in a specialist who might have some additional \
                       solutions. Let me transfer you now.",
        },
    );
    table.insert(
        "jennifer",
        EscalationPhrases {
            user_requested: "You got it! Let me get you over to one of our specialists right \
                             quick. They're real good at what they do!",
            user_frustrated: "Well shoot, I'm real sorry this has been giving you so much \
                              trouble. Tell ya what, let me get you connected with someone \
                              who can really dig into this for you.",
            fallback: "Alright, we've been through quite a bit here! Let me hand you off to \
                       one of our specialists - they've got a few more tricks they can try.",
        },
    );
    table
});

/// Successful turn: keep the dialog open and carry attributes forward
pub fn success_response(
    persona: &Persona,
    message: &str,
    session_attributes: HashMap<String, String>,
) -> TurnResponse {
    TurnResponse {
        session_state: ResponseSessionState {
            dialog_action: DialogAction {
                action_type: DialogActionType::Continue,
            },
            intent: None,
            session_attributes,
        },
        messages: vec![Message {
            content_type: ContentType::SpeechMarkup,
            content: build_ssml(persona, message),
        }],
    }
}

/// Recoverable failure: keep the dialog open but drop the attributes so
/// stale state is not carried past the failure
pub fn error_response(persona: &Persona, message: &str) -> TurnResponse {
    TurnResponse {
        session_state: ResponseSessionState {
            dialog_action: DialogAction {
                action_type: DialogActionType::Continue,
            },
            intent: None,
            session_attributes: HashMap::new(),
        },
        messages: vec![Message {
            content_type: ContentType::SpeechMarkup,
            content: build_ssml(persona, message),
        }],
    }
}

/// Welcome prompt for an empty opening transcript
pub fn welcome_response(
    persona: &Persona,
    session_attributes: HashMap<String, String>,
) -> TurnResponse {
    let greeting = persona
        .phrases
        .first(PhraseKind::Greeting)
        .unwrap_or(phrases::WELCOME);
    success_response(persona, greeting, session_attributes)
}

/// Hand the conversation to a human
///
/// Closes the dialog and adds the three escalation keys on top of the
/// attributes already in the session, leaving unrelated keys intact.
pub fn escalation_response(
    persona: &Persona,
    decision: &EscalationDecision,
    mut session_attributes: HashMap<String, String>,
) -> TurnResponse {
    let message = escalation_message(persona, decision.reason);

    session_attributes.insert(attr_keys::ESCALATION_REQUESTED.to_string(), "true".to_string());
    session_attributes.insert(
        attr_keys::ESCALATION_REASON.to_string(),
        decision.reason.as_str().to_string(),
    );
    session_attributes.insert(
        attr_keys::ESCALATION_PRIORITY.to_string(),
        decision.priority.as_str().to_string(),
    );

    TurnResponse {
        session_state: ResponseSessionState {
            dialog_action: DialogAction {
                action_type: DialogActionType::Close,
            },
            intent: Some(Intent {
                name: ESCALATE_INTENT.to_string(),
                state: FULFILLED.to_string(),
            }),
            session_attributes,
        },
        messages: vec![Message {
            content_type: ContentType::SpeechMarkup,
            content: build_ssml(persona, message),
        }],
    }
}

/// Health-check invocation: plain text, no speech synthesis involved
pub fn health_check_response() -> TurnResponse {
    TurnResponse {
        session_state: ResponseSessionState {
            dialog_action: DialogAction {
                action_type: DialogActionType::Close,
            },
            intent: Some(Intent {
                name: HEALTH_CHECK_INTENT.to_string(),
                state: FULFILLED.to_string(),
            }),
            session_attributes: HashMap::new(),
        },
        messages: vec![Message {
            content_type: ContentType::Text,
            content: phrases::HEALTH_CHECK_OK.to_string(),
        }],
    }
}

/// Pick the escalation text: persona phrase bank first, then the builtin
/// table, then the generic record
fn escalation_message<'a>(persona: &'a Persona, reason: EscalationReason) -> &'a str {
    if let Some(phrase) = persona.phrases.first(PhraseKind::Escalation) {
        return phrase;
    }
    ESCALATION_TABLE
        .get(persona.persona_id.as_str())
        .unwrap_or(&GENERIC_ESCALATION)
        .for_reason(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_agent_core::{default_persona, EscalationPriority};

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn bare_persona(id: &str) -> Persona {
        let mut persona = default_persona();
        persona.persona_id = id.to_string();
        persona.phrases.escalation.clear();
        persona
    }

    #[test]
    fn success_keeps_dialog_open_and_attributes() {
        let persona = default_persona();
        let response = success_response(&persona, "All set.", attrs(&[("user_name", "John")]));

        assert_eq!(
            response.session_state.dialog_action.action_type,
            DialogActionType::Continue
        );
        assert!(response.session_state.intent.is_none());
        assert_eq!(
            response.session_state.session_attributes.get("user_name"),
            Some(&"John".to_string())
        );
        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.messages[0].content_type, ContentType::SpeechMarkup);
        assert!(response.messages[0].content.contains("All set."));
    }

    #[test]
    fn error_resets_attributes() {
        let persona = default_persona();
        let response = error_response(&persona, "Trouble connecting.");
        assert!(response.session_state.session_attributes.is_empty());
        assert_eq!(
            response.session_state.dialog_action.action_type,
            DialogActionType::Continue
        );
    }

    #[test]
    fn escalation_closes_and_sets_all_three_keys() {
        let persona = bare_persona("tangerine");
        let decision = EscalationDecision::escalate(
            EscalationReason::UserRequested,
            EscalationPriority::High,
        );
        let response =
            escalation_response(&persona, &decision, attrs(&[("user_name", "John")]));

        assert_eq!(
            response.session_state.dialog_action.action_type,
            DialogActionType::Close
        );
        let intent = response.session_state.intent.as_ref().unwrap();
        assert_eq!(intent.name, "escalate");
        assert_eq!(intent.state, "Fulfilled");

        let attrs = &response.session_state.session_attributes;
        assert_eq!(attrs.get("escalation_requested"), Some(&"true".to_string()));
        assert_eq!(
            attrs.get("escalation_reason"),
            Some(&"user_requested".to_string())
        );
        assert_eq!(attrs.get("escalation_priority"), Some(&"high".to_string()));
        // Pre-existing unrelated attributes are preserved, not replaced
        assert_eq!(attrs.get("user_name"), Some(&"John".to_string()));
    }

    #[test]
    fn persona_phrase_bank_overrides_builtin_table() {
        let mut persona = bare_persona("tangerine");
        persona.phrases.escalation = vec!["Hold tight, transferring you now.".to_string()];

        let decision = EscalationDecision::escalate(
            EscalationReason::UserFrustrated,
            EscalationPriority::Medium,
        );
        let response = escalation_response(&persona, &decision, HashMap::new());
        assert!(response.messages[0]
            .content
            .contains("Hold tight, transferring you now."));
    }

    #[test]
    fn builtin_table_selects_by_persona_and_reason() {
        let decision = EscalationDecision::escalate(
            EscalationReason::UserFrustrated,
            EscalationPriority::Medium,
        );
        let response = escalation_response(&bare_persona("joseph"), &decision, HashMap::new());
        assert!(response.messages[0].content.contains("dig a little deeper"));
    }

    #[test]
    fn unknown_persona_gets_generic_transfer_message() {
        let decision = EscalationDecision::escalate(
            EscalationReason::TroubleshootingExhausted,
            EscalationPriority::Medium,
        );
        let response = escalation_response(&bare_persona("mystery"), &decision, HashMap::new());
        assert!(response.messages[0].content.contains("connect you with a specialist"));
    }

    #[test]
    fn every_builtin_escalation_text_mentions_the_handoff() {
        for persona_id in ["tangerine", "joseph", "jennifer"] {
            let record = ESCALATION_TABLE.get(persona_id).unwrap();
            for text in [record.user_requested, record.user_frustrated, record.fallback] {
                let lowered = text.to_lowercase();
                assert!(
                    lowered.contains("transfer")
                        || lowered.contains("connect")
                        || lowered.contains("hand you off")
                        || lowered.contains("get you through")
                        || lowered.contains("get you over"),
                    "{persona_id}: {text}"
                );
            }
        }
    }

    #[test]
    fn health_check_is_plain_text_close() {
        let response = health_check_response();
        assert_eq!(
            response.session_state.dialog_action.action_type,
            DialogActionType::Close
        );
        let intent = response.session_state.intent.as_ref().unwrap();
        assert_eq!(intent.name, "health-check");
        assert_eq!(response.messages[0].content_type, ContentType::Text);
        assert!(!response.messages[0].content.contains("<speak>"));
    }

    #[test]
    fn welcome_uses_persona_greeting() {
        let persona = default_persona();
        let response = welcome_response(&persona, HashMap::new());
        assert!(response.messages[0]
            .content
            .contains("here to help you with your headset"));
    }
}
