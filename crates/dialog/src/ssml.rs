//! Speech markup construction
//!
//! Wraps message text in a prosody-carrying speech wrapper using the
//! persona's rate and pitch. Input text is untrusted (it usually comes
//! straight from the upstream model), so every markup-significant
//! character is escaped before embedding; a malformed wrapper would fail
//! synthesis for the whole turn.

use support_agent_core::Persona;

/// Substituted when the text to synthesize is empty
pub const EMPTY_TEXT_REPROMPT: &str = support_agent_config::constants::phrases::REPROMPT;

/// Wrap text in speech markup with the persona's voice settings
pub fn build_ssml(persona: &Persona, text: &str) -> String {
    let text = if text.trim().is_empty() {
        EMPTY_TEXT_REPROMPT
    } else {
        text
    };

    let mut escaped = escape_markup(text);

    // Some models include their own wrapper tags which would break ours
    escaped = escaped.replace("&lt;speak&gt;", "");
    escaped = escaped.replace("&lt;/speak&gt;", "");

    format!(
        r#"<speak><prosody rate="{}" pitch="{}">{}</prosody></speak>"#,
        persona.voice.prosody.rate, persona.voice.prosody.pitch, escaped
    )
}

/// Escape the characters that are significant in speech markup
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
