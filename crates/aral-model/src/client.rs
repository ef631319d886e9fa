//! Bytez-compatible inference API client.
//!
//! Speaks the hosted model-serving REST protocol: a single POST per
//! generation carrying a chat-style message list, answered by a JSON body
//! with `error` and `output` fields. The `output` shape varies by model
//! and SDK version, so it is normalized to one string here rather than in
//! the renderer.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use ureq::Agent;

use crate::error::ModelError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Text-generation backend.
///
/// Handlers hold a `dyn ModelClient` so tests can swap in a scripted
/// implementation.
pub trait ModelClient: Send + Sync {
    /// Run one generation for `prompt` and return the normalized output
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the transport fails, the server
    /// responds with an error status, or the API reports a generation
    /// failure.
    fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Request body for a model run.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    messages: Vec<Message<'a>>,
}

/// A single chat message.
#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from a model run.
#[derive(serde::Deserialize)]
struct GenerateResponse {
    /// Error reported by the API (string or structured object).
    #[serde(default)]
    error: Option<Value>,
    /// Generated output; shape varies (string, message object, or array
    /// of message objects).
    #[serde(default)]
    output: Value,
}

/// Sync HTTP client for a Bytez-compatible model endpoint.
pub struct BytezClient {
    agent: Agent,
    base_url: String,
    model_id: String,
    api_key: String,
}

impl BytezClient {
    /// Create client from config values.
    ///
    /// # Arguments
    /// * `api_key` - API key sent as the `Authorization: Key ...` header
    /// * `model_id` - Model identifier, e.g. `Qwen/Qwen3-0.6B`
    /// * `base_url` - Inference API base URL
    #[must_use]
    pub fn from_config(api_key: &str, model_id: &str, base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model_id: model_id.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// URL of the configured model's run endpoint.
    fn model_url(&self) -> String {
        format!("{}/{}", self.base_url, self.model_id)
    }
}

impl ModelClient for BytezClient {
    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let request = GenerateRequest {
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model_id, "Sending generation request");

        let response = self
            .agent
            .post(&self.model_url())
            .header("Authorization", &format!("Key {}", self.api_key))
            .header("Accept", "application/json")
            .send_json(&request)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_string());
            return Err(ModelError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let body: GenerateResponse = body_reader.read_json()?;
        if let Some(error) = body.error {
            return Err(ModelError::Api {
                message: error_text(&error),
            });
        }

        Ok(normalize_output(&body.output))
    }
}

/// Flatten the varied `output` shapes to a single string.
///
/// Arrays of message objects are joined with newlines; a lone message
/// object contributes its `content`; plain strings pass through. A null
/// output normalizes to the empty string.
fn normalize_output(output: &Value) -> String {
    match output {
        Value::Array(items) => items
            .iter()
            .map(message_text)
            .collect::<Vec<_>>()
            .join("\n"),
        other => message_text(other),
    }
}

/// Text of one message-shaped value: its `content` field when present,
/// otherwise its own string form.
fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("content") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => value.to_string(),
            Some(other) => other.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Human-readable form of the API's `error` field.
fn error_text(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
