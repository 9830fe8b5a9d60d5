use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("config file is not valid JSON: {0}")]
    Serde(String),

    #[error("config field `{field}` is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}
