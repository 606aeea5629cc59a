//! Persona id resolution
//!
//! A turn can name its persona several ways. Resolution walks an ordered
//! list of candidate sources and the first non-empty value wins:
//! explicit request value, then the `persona_id` session attribute, then
//! the configured default, then the literal fallback constant.

use std::collections::HashMap;

use support_agent_core::turn::attr_keys;

/// Literal last-resort persona id
const FALLBACK_PERSONA_ID: &str = "tangerine";

/// Resolve the persona id for a turn
pub fn resolve_persona_id(
    explicit: Option<&str>,
    session_attributes: &HashMap<String, String>,
    configured_default: Option<&str>,
) -> String {
    let candidates = [
        explicit,
        session_attributes
            .get(attr_keys::PERSONA_ID)
            .map(String::as_str),
        configured_default,
    ];

    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(FALLBACK_PERSONA_ID)
        .to_string()
}
