//! Escalation detection, response rendering, and turn orchestration
//!
//! The decision pipeline for the support voice agent:
//! - [`escalation`]: pure per-turn classification of escalation triggers
//! - [`ssml`]: voice-safe speech-markup construction
//! - [`response`]: rendering decisions into transport-independent responses
//! - [`agent`]: the upstream conversational-agent collaborator
//! - [`orchestrator`]: the per-turn state machine tying it all together

pub mod agent;
mod error;
pub mod escalation;
pub mod orchestrator;
pub mod response;
pub mod ssml;

pub use agent::{clean_reply, ConversationalAgent, HttpAgentClient};
pub use error::DialogError;
pub use escalation::{classify, FAILED_STEPS_THRESHOLD, FRUSTRATION_THRESHOLD};
pub use orchestrator::TurnHandler;
pub use response::{
    error_response, escalation_response, health_check_response, success_response, welcome_response,
};
pub use ssml::{build_ssml, escape_markup};
