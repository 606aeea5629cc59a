//! Escalation detection
//!
//! Pure classification of one conversational turn. The classifier keeps no
//! state of its own; cumulative frustration and failed-step counts are
//! owned by the caller and threaded through session attributes.

use support_agent_core::{EscalationDecision, EscalationPriority, EscalationReason};

/// Phrases that are an explicit request for a human agent
pub const ESCAPE_KEYWORDS: &[&str] = &[
    "agent",
    "human",
    "representative",
    "speak to someone",
    "real person",
    "transfer me",
    "manager",
    "supervisor",
    "talk to a person",
    "live agent",
    "customer service",
    "operator",
];

/// Phrases that indicate user frustration
pub const FRUSTRATION_INDICATORS: &[&str] = &[
    "this is ridiculous",
    "doesn't work",
    "still not working",
    "frustrated",
    "waste of time",
    "useless",
    "terrible",
    "not helping",
    "give up",
    "stupid",
    "hate this",
    "worst",
    "never works",
    "broken",
    "garbage",
];

/// Cumulative frustration at or above this escalates the turn
pub const FRUSTRATION_THRESHOLD: i64 = 3;

/// Failed troubleshooting steps at or above this escalates the turn
pub const FAILED_STEPS_THRESHOLD: i64 = 5;

/// Analyze one utterance for escalation triggers
///
/// Checks run in strict priority order and the first match wins: an
/// explicit human request always escalates regardless of the counters,
/// then accumulated frustration, then troubleshooting exhaustion.
/// Matching is case-folded substring containment, not tokenization.
pub fn classify(
    utterance: &str,
    prior_frustration: i64,
    prior_failed_steps: i64,
) -> EscalationDecision {
    let lowered = utterance.to_lowercase();

    if ESCAPE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return EscalationDecision::escalate(
            EscalationReason::UserRequested,
            EscalationPriority::High,
        );
    }

    let turn_frustration = FRUSTRATION_INDICATORS
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .count() as i64;

    if prior_frustration + turn_frustration >= FRUSTRATION_THRESHOLD {
        return EscalationDecision::escalate(
            EscalationReason::UserFrustrated,
            EscalationPriority::Medium,
        );
    }

    if prior_failed_steps >= FAILED_STEPS_THRESHOLD {
        return EscalationDecision::escalate(
            EscalationReason::TroubleshootingExhausted,
            EscalationPriority::Medium,
        );
    }

    EscalationDecision::none()
}
