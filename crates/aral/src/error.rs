//! CLI error types.

use aral_config::ConfigError;
use aral_model::ModelError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Server(String),
}
