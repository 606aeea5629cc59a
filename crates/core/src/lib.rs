//! Core types for the support voice agent
//!
//! Shared domain types used by every other crate:
//! - Persona records (voice, personality, phrase bank)
//! - Escalation decisions
//! - Transport-independent turn request/response shapes

pub mod escalation;
pub mod persona;
pub mod turn;

pub use escalation::{EscalationDecision, EscalationPriority, EscalationReason};
pub use persona::{default_persona, Persona, Personality, PhraseBank, PhraseKind, Prosody, VoiceConfig};
pub use turn::{
    attr_keys, get_int_attr, AgentReply, ContentType, DialogAction, DialogActionType, Intent,
    Message, ResponseSessionState, SessionState, TurnRequest, TurnResponse,
};
