//! Persona registry for the support voice agent
//!
//! Maps persona ids to voice, personality, and phrase-bank records:
//! - [`PersonaStore`] trait with an in-memory, YAML-seedable implementation
//! - builtin personas shipped with the service
//! - the persona-id resolution chain used per turn

pub mod builtin;
mod error;
mod resolve;
mod store;

pub use builtin::builtin_personas;
pub use error::PersonaError;
pub use resolve::resolve_persona_id;
pub use store::{MemoryPersonaStore, PersonaStore};
