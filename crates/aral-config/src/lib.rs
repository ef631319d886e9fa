//! Configuration management for aral.
//!
//! Parses `aral.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `model.api_key`
//! - `model.model_id`
//! - `model.base_url`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override model API key.
    pub api_key: Option<String>,
    /// Override model identifier.
    pub model_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "aral.toml";

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Model inference configuration.
    pub model: ModelConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

/// Model inference configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key for the inference service. Generation is disabled until
    /// this is set.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model_id: String,
    /// Inference API base URL.
    pub base_url: String,
    /// Policy for model-supplied HTML blocks: "trusted" or "sanitized".
    pub html_passthrough: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_id: "Qwen/Qwen3-0.6B".to_owned(),
            base_url: "https://api.bytez.com/models/v2".to_owned(),
            html_passthrough: "trusted".to_owned(),
        }
    }
}

impl ModelConfig {
    /// Whether an API key is available for generation.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`model.api_key`").
        field: String,
        /// Error message (e.g., "${`ARAL_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `aral.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(api_key) = &settings.api_key {
            self.model.api_key = Some(api_key.clone());
        }
        if let Some(model_id) = &settings.model_id {
            self.model.model_id.clone_from(model_id);
        }
    }

    /// Get model configuration, requiring a usable API key.
    ///
    /// Use this instead of accessing the `model` field directly when the
    /// command cannot proceed without generation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no API key is configured.
    pub fn require_model(&self) -> Result<&ModelConfig, ConfigError> {
        if !self.model.is_configured() {
            return Err(ConfigError::Validation(
                "model.api_key is not set; export ARAL_API_KEY or add it to aral.toml".to_owned(),
            ));
        }
        Ok(&self.model)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and expansion
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_model()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate model configuration.
    fn validate_model(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.model.model_id, "model.model_id")?;
        require_non_empty(&self.model.base_url, "model.base_url")?;
        require_http_url(&self.model.base_url, "model.base_url")?;

        if !matches!(
            self.model.html_passthrough.as_str(),
            "trusted" | "sanitized"
        ) {
            return Err(ConfigError::Validation(format!(
                "model.html_passthrough must be \"trusted\" or \"sanitized\", got \"{}\"",
                self.model.html_passthrough
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref api_key) = self.model.api_key {
            self.model.api_key = Some(expand::expand_env(api_key, "model.api_key")?);
        }
        self.model.model_id = expand::expand_env(&self.model.model_id, "model.model_id")?;
        self.model.base_url = expand::expand_env(&self.model.base_url, "model.base_url")?;

        Ok(())
    }
}
