//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("parameter {0} not found")]
    ParameterNotFound(String),

    #[error("parameter source error: {0}")]
    ParameterSource(String),
}
