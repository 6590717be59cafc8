//! Call-related error types.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CallError {
    #[error("no tokio runtime available to host call timers")]
    NoRuntime,

    #[error("invalid simulator config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
