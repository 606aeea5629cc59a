//! Persona store
//!
//! `load` is the turn-handling read path; `save` is the write path used by
//! configuration tooling and the admin route, never during a turn.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::info;

use support_agent_core::Persona;

use crate::error::PersonaError;

/// Read/write access to persona records
#[async_trait]
pub trait PersonaStore: Send + Sync {
    async fn load(&self, persona_id: &str) -> Result<Persona, PersonaError>;
    async fn save(&self, persona: Persona) -> Result<(), PersonaError>;
}

/// In-memory persona table
///
/// Seeded from the builtins and optionally merged with records from a YAML
/// file; later writes through `save` replace existing entries.
pub struct MemoryPersonaStore {
    personas: DashMap<String, Persona>,
}

impl MemoryPersonaStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            personas: DashMap::new(),
        }
    }

    /// Store pre-populated with the builtin personas
    pub fn with_builtins() -> Self {
        let store = Self::new();
        for persona in crate::builtin::builtin_personas() {
            store.insert(persona);
        }
        store
    }

    /// Merge persona records from a YAML file, overriding same-id entries
    ///
    /// The file holds a YAML sequence of persona records.
    pub fn merge_yaml_file(&self, path: impl AsRef<Path>) -> Result<usize, PersonaError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PersonaError::File {
            path: path.display().to_string(),
            source,
        })?;
        let personas: Vec<Persona> = serde_yaml::from_str(&raw)?;
        let count = personas.len();
        for persona in personas {
            validate(&persona)?;
            self.insert(persona);
        }
        info!(path = %path.display(), count, "merged persona records from file");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    fn insert(&self, persona: Persona) {
        self.personas.insert(persona.persona_id.clone(), persona);
    }
}

impl Default for MemoryPersonaStore {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[async_trait]
impl PersonaStore for MemoryPersonaStore {
    async fn load(&self, persona_id: &str) -> Result<Persona, PersonaError> {
        self.personas
            .get(persona_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| PersonaError::NotFound(persona_id.to_string()))
    }

    async fn save(&self, persona: Persona) -> Result<(), PersonaError> {
        validate(&persona)?;
        self.insert(persona);
        Ok(())
    }
}

fn validate(persona: &Persona) -> Result<(), PersonaError> {
    if persona.persona_id.trim().is_empty() {
        return Err(PersonaError::Invalid("persona_id must not be empty".into()));
    }
    if persona.voice.prosody.rate.trim().is_empty() || persona.voice.prosody.pitch.trim().is_empty()
    {
        return Err(PersonaError::Invalid(format!(
            "persona {} must set prosody rate and pitch",
            persona.persona_id
        )));
    }
    Ok(())
}
