//! `aral serve` command implementation.

use std::path::PathBuf;

use aral_config::{CliSettings, Config};
use aral_server::{run_server, server_config_from_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover aral.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Inference API key (overrides config).
    #[arg(long, env = "ARAL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier (overrides config).
    #[arg(long)]
    model_id: Option<String>,

    /// Enable verbose output (show request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            api_key: self.api_key,
            model_id: self.model_id,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Model: {}", config.model.model_id));

        if config.model.is_configured() {
            output.info(&format!("Inference API: {}", config.model.base_url));
        } else {
            output.warning("No API key configured: lesson generation is disabled");
            output.info("Set ARAL_API_KEY or add model.api_key to aral.toml to enable it");
        }

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_string());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
