//! Persona records
//!
//! A persona bundles the voice, personality, and phrase-bank settings that
//! control how responses are styled. Personas are created and updated by
//! external configuration tooling; the turn-handling path only reads them
//! and falls back to [`default_persona`] when a lookup fails.

use serde::{Deserialize, Serialize};

/// An agent persona configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub persona_id: String,
    pub display_name: String,
    pub voice: VoiceConfig,
    pub personality: Personality,
    pub phrases: PhraseBank,
    pub system_prompt: String,
    #[serde(default)]
    pub filler_phrases: Vec<String>,
}

/// Voice synthesis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    pub voice_id: String,
    pub engine: String,
    pub language_code: String,
    pub prosody: Prosody,
    /// Prefer the streaming speech model over batch synthesis
    #[serde(default)]
    pub use_streaming_voice: bool,
    /// Voice id for the streaming model, when enabled
    #[serde(default)]
    pub streaming_voice_id: String,
}

/// Speech rate and pitch applied to rendered markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prosody {
    pub rate: String,
    pub pitch: String,
}

/// Character traits used when building agent prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub origin: String,
    pub age: u32,
    pub gender: String,
    pub traits: Vec<String>,
    pub speech_style: String,
    pub pace: String,
}

/// Situation-specific phrase lists
///
/// Invariant: each list is either empty (a hard-coded default applies) or
/// holds at least one non-empty string. The first entry of a list is the
/// default pick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhraseBank {
    #[serde(default)]
    pub greeting: Vec<String>,
    #[serde(default)]
    pub confirmation: Vec<String>,
    #[serde(default)]
    pub encouragement: Vec<String>,
    #[serde(default)]
    pub empathy: Vec<String>,
    #[serde(default)]
    pub escalation: Vec<String>,
}

/// Phrase list selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    Greeting,
    Confirmation,
    Encouragement,
    Empathy,
    Escalation,
}

impl PhraseBank {
    fn list(&self, kind: PhraseKind) -> &[String] {
        match kind {
            PhraseKind::Greeting => &self.greeting,
            PhraseKind::Confirmation => &self.confirmation,
            PhraseKind::Encouragement => &self.encouragement,
            PhraseKind::Empathy => &self.empathy,
            PhraseKind::Escalation => &self.escalation,
        }
    }

    /// First usable phrase of a list, skipping empty strings
    pub fn first(&self, kind: PhraseKind) -> Option<&str> {
        self.list(kind)
            .iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

/// Fallback persona substituted whenever a registry lookup fails
pub fn default_persona() -> Persona {
    Persona {
        persona_id: "default".to_string(),
        display_name: "Support Agent".to_string(),
        voice: VoiceConfig {
            voice_id: "Joanna".to_string(),
            engine: "neural".to_string(),
            language_code: "en-US".to_string(),
            prosody: Prosody {
                rate: "100%".to_string(),
                pitch: "medium".to_string(),
            },
            use_streaming_voice: false,
            streaming_voice_id: String::new(),
        },
        personality: Personality {
            origin: "USA".to_string(),
            age: 30,
            gender: "female".to_string(),
            traits: vec!["helpful".to_string(), "professional".to_string()],
            speech_style: "neutral".to_string(),
            pace: "normal".to_string(),
        },
        phrases: PhraseBank {
            greeting: vec!["Hello! I'm here to help you with your headset.".to_string()],
            confirmation: vec!["Great, that worked!".to_string()],
            encouragement: vec!["You're doing well.".to_string()],
            empathy: vec!["I understand that can be frustrating.".to_string()],
            escalation: vec!["Let me connect you with a specialist.".to_string()],
        },
        system_prompt: "You are a helpful technical support agent specializing in headset \
                        troubleshooting. Be friendly, patient, and guide users through \
                        troubleshooting steps one at a time. Keep responses concise and clear \
                        for voice interactions."
            .to_string(),
        filler_phrases: Vec::new(),
    }
}
