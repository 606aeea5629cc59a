//! Dialog errors
//!
//! All of these are recoverable: the orchestrator converts them into a
//! degraded but valid response instead of surfacing them to the transport.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("agent error: {0}")]
    Agent(String),

    #[error("agent timeout: {0}")]
    AgentTimeout(String),

    #[error("empty reply from agent for session {session_id}")]
    EmptyAgentReply { session_id: String },
}
