//! Escalation decision types
//!
//! A decision is produced fresh for every turn by the classifier and never
//! persisted directly; only its reason and priority strings are copied into
//! session attributes when a transfer is triggered.

use serde::{Deserialize, Serialize};

/// Why a conversation is being handed to a human
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationReason {
    UserRequested,
    UserFrustrated,
    TroubleshootingExhausted,
    #[default]
    None,
}

impl EscalationReason {
    /// Session-attribute string form; empty when no escalation applies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserRequested => "user_requested",
            Self::UserFrustrated => "user_frustrated",
            Self::TroubleshootingExhausted => "troubleshooting_exhausted",
            Self::None => "",
        }
    }
}

/// Urgency attached to a transfer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationPriority {
    High,
    Medium,
    #[default]
    None,
}

impl EscalationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::None => "",
        }
    }
}

/// Result of escalation detection for one turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationDecision {
    pub should_escalate: bool,
    pub reason: EscalationReason,
    pub priority: EscalationPriority,
}

impl EscalationDecision {
    /// Decision that keeps automated troubleshooting going
    pub fn none() -> Self {
        Self::default()
    }

    pub fn escalate(reason: EscalationReason, priority: EscalationPriority) -> Self {
        Self {
            should_escalate: true,
            reason,
            priority,
        }
    }
}
