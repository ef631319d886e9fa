//! Client for the hosted model-inference API.
//!
//! Sends lesson-generation prompts to a Bytez-compatible model endpoint
//! and normalizes the varied response shapes into a single string. The
//! [`ModelClient`] trait is the seam handlers depend on:
//!
//! - [`BytezClient`] for production use (sync HTTP via ureq)
//! - [`MockModelClient`] for testing (behind `mock` feature flag)

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod prompt;

pub use client::{BytezClient, ModelClient};
pub use error::ModelError;
#[cfg(feature = "mock")]
pub use mock::MockModelClient;
pub use prompt::{LESSON_PARTS, build_prompt};
