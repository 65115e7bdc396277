//! Wire types for the Anthropic Messages API.

use serde::{Deserialize, Serialize};

/// Image payload of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnthropicImageSource {
    /// Inline base64 data
    Base64 {
        /// MIME type, e.g. "image/png"
        media_type: String,
        /// Base64-encoded bytes
        data: String,
    },
    /// Remote image
    Url {
        /// Image URL
        url: String,
    },
}

/// A request content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnthropicContentBlock {
    /// Text block
    Text {
        /// Text content
        text: String,
    },
    /// Image block
    Image {
        /// Image source
        source: AnthropicImageSource,
    },
}

/// One conversation turn.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    role: String,
    /// Content blocks
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a new message builder.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Body of `POST /v1/messages`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Conversation
    messages: Vec<AnthropicMessage>,
    /// System prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a new request builder.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// A response content block.
///
/// Non-text blocks (tool use, thinking) keep their `type` and carry no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AnthropicResponseContent {
    /// Block type, e.g. "text"
    #[serde(rename = "type")]
    kind: String,
    /// Text, for text blocks
    #[serde(default)]
    text: Option<String>,
}

/// Token accounting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct AnthropicUsage {
    /// Prompt tokens
    #[serde(default)]
    input_tokens: u64,
    /// Completion tokens
    #[serde(default)]
    output_tokens: u64,
}

/// Body of a successful `POST /v1/messages` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AnthropicResponse {
    /// Message id
    id: String,
    /// Model that answered
    model: String,
    /// Content blocks
    content: Vec<AnthropicResponseContent>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
    /// Token usage
    #[serde(default)]
    usage: AnthropicUsage,
}
