//! `aral generate` command implementation.

use std::path::PathBuf;

use aral_config::{CliSettings, Config, ModelConfig};
use aral_model::{BytezClient, ModelClient, build_prompt};
use aral_renderer::{HtmlPassthrough, TableRenderer};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Grade level (e.g., "Grade 7").
    #[arg(short, long)]
    grade: String,

    /// Subject (e.g., "Science").
    #[arg(short, long)]
    subject: String,

    /// Lesson objective.
    #[arg(short, long)]
    objective: String,

    /// Print the rendered HTML table instead of the raw model output.
    #[arg(long)]
    html: bool,

    /// Inference API key (overrides config).
    #[arg(long, env = "ARAL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier (overrides config).
    #[arg(long)]
    model_id: Option<String>,

    /// Path to configuration file (default: auto-discover aral.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete or the model call fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Load config
        let cli_settings = CliSettings {
            api_key: self.api_key.clone(),
            model_id: self.model_id.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Require a usable model config
        let model_config = require_model_config(&config, &output)?;

        let client = BytezClient::from_config(
            model_config.api_key.as_deref().unwrap_or_default(),
            &model_config.model_id,
            &model_config.base_url,
        );

        output.info(&format!(
            "Generating lesson plan for {} / {}...",
            self.grade, self.subject
        ));

        let prompt = build_prompt(&self.grade, &self.subject, &self.objective);
        let raw = client.generate(&prompt)?;

        output.success("Lesson plan generated");
        output.separator();

        if self.html {
            let passthrough =
                HtmlPassthrough::from_name(&model_config.html_passthrough).unwrap_or_default();
            let renderer = TableRenderer::new().with_passthrough(passthrough);
            match renderer.render(&raw) {
                Some(html) => output.info(&html),
                None => {
                    output.warning("No table found in model output, printing raw text");
                    output.info(&raw);
                }
            }
        } else {
            output.info(&raw);
        }

        Ok(())
    }
}

/// Require model configuration with a usable API key, printing setup help
/// when it is missing.
fn require_model_config<'a>(
    config: &'a Config,
    output: &Output,
) -> Result<&'a ModelConfig, CliError> {
    match config.require_model() {
        Ok(model) => Ok(model),
        Err(err) => {
            output.error("Error: model API key required");
            output.info("\nSet the ARAL_API_KEY environment variable, or add it to your aral.toml:");
            output.info("\n[model]");
            output.info(r#"api_key = "your-key""#);
            Err(err.into())
        }
    }
}
