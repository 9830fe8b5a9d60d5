use tally_config::ConfigError;
use tally_core::EngineError;
use thiserror::Error;

/// Failures surfaced by the root services.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type TallyResult<T> = Result<T, TallyError>;
