//! Anthropic Messages API client.

mod client;
mod dto;

pub use client::{ANTHROPIC_API_URL, AnthropicClient};
pub use dto::{
    AnthropicContentBlock, AnthropicImageSource, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicResponseContent,
    AnthropicUsage,
};
