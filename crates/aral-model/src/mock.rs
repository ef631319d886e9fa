//! Mock model client for testing.
//!
//! Provides [`MockModelClient`] for handler tests without network access.

use std::sync::Mutex;

use crate::client::ModelClient;
use crate::error::ModelError;

/// Scripted model client for tests.
///
/// Replays queued responses in order and records every prompt it was
/// asked to generate for. Use the builder methods to queue test data.
///
/// # Example
///
/// ```
/// use aral_model::{MockModelClient, ModelClient};
///
/// let client = MockModelClient::new().with_response("A | B\n---|---\n1 | 2");
/// let text = client.generate("any prompt").unwrap();
/// assert!(text.contains('|'));
/// ```
#[derive(Debug, Default)]
pub struct MockModelClient {
    responses: Mutex<Vec<Result<String, ModelError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockModelClient {
    /// Create a new mock with an empty response queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful generation returning `text`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(text.into()));
        self
    }

    /// Queue a failed generation returning `error`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_error(self, error: ModelError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Prompts received so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ModelClient for MockModelClient {
    fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ModelError::Api {
                message: "no scripted response".to_owned(),
            });
        }
        responses.remove(0)
    }
}
