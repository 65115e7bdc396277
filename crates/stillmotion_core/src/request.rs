//! Request and response types for LLM generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// # Examples
///
/// ```
/// use stillmotion_core::{GenerateRequest, Input, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .system(Some("You are a film director.".to_string()))
///     .messages(vec![Message {
///         role: Role::User,
///         content: vec![Input::Text("Hello!".to_string())],
///     }])
///     .max_tokens(Some(500))
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(500));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// System instruction sent alongside the conversation
    pub system: Option<String>,
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use stillmotion_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("  A slow dolly-in.  ".to_string())],
/// };
///
/// assert_eq!(response.first_text(), Some("A slow dolly-in."));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// First non-blank text output, trimmed.
    pub fn first_text(&self) -> Option<&str> {
        self.outputs
            .iter()
            .map(|Output::Text(text)| text.trim())
            .find(|text| !text.is_empty())
    }
}
