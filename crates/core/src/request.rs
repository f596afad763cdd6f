//! Wire types for the completion endpoint.
//!
//! Legacy text completions: a plain `prompt` in, a list of `choices`
//! with a `text` field out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Completion request body.
///
/// Built fresh for every call and never persisted. `temperature` is
/// pinned to zero so diagnostics stay reproducible across runs.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// The model identifier.
    pub model: String,

    /// The prompt to complete.
    pub prompt: String,

    /// Maximum tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature, always zero.
    pub temperature: u32,
}

impl CompletionRequest {
    /// Build a request with the fixed zero temperature.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens,
            temperature: 0,
        }
    }
}

/// Completion response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    /// The list of completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Completed text. Kept as a raw JSON value so a malformed payload
    /// stays representable instead of failing deserialization.
    #[serde(default)]
    pub text: Value,
}

impl CompletionResponse {
    /// Text of the first choice, when it actually is a string.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().and_then(|choice| choice.text.as_str())
    }
}
