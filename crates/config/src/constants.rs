//! Centralized constants for the support voice agent
//!
//! Single source of truth for timeouts, sentinel values, and canned
//! sentences used across the codebase. Use these instead of hardcoding
//! values in multiple files.

/// Timeouts
pub mod timeouts {
    /// Upstream agent invocation deadline (seconds)
    ///
    /// Leaves a multi-second buffer under the 30s platform deadline so a
    /// hung collaborator degrades to the error-response path instead of
    /// timing out the whole turn.
    pub const UPSTREAM_AGENT_SECS: u64 = 25;

    /// Persona registry lookup deadline (seconds)
    pub const PERSONA_LOOKUP_SECS: u64 = 5;
}

/// Sentinel written into agent parameters by provisioning before the real
/// values exist; treated the same as unset
pub const PLACEHOLDER: &str = "PLACEHOLDER";

/// Persona used when nothing else resolves
pub const FALLBACK_PERSONA_ID: &str = "tangerine";

/// Canned sentences
pub mod phrases {
    /// Substituted when a message to synthesize is empty
    pub const REPROMPT: &str =
        "I'm sorry, I didn't catch that. Could you please repeat your question?";

    /// Welcome prompt for an empty first transcript
    pub const WELCOME: &str = "Hi there! I'm your headset support assistant. \
                               Please describe your issue and I'll help you troubleshoot.";

    /// Returned while the upstream agent is still being provisioned
    pub const CONFIGURING: &str = "Hello! I'm setting up right now. The system is being \
                                   configured. Please try again in a few minutes.";

    /// Returned when the upstream agent call fails or times out
    pub const TROUBLE_CONNECTING: &str =
        "I'm having a bit of trouble connecting. Let me try that again.";

    /// Health-check body
    pub const HEALTH_CHECK_OK: &str = "Health check passed. Service is operational.";
}
