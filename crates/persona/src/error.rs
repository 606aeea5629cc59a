//! Persona registry errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("persona {0} not found")]
    NotFound(String),

    #[error("failed to read persona file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse persona file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid persona record: {0}")]
    Invalid(String),
}
