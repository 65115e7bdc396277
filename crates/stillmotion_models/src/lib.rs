//! LLM provider integrations for stillmotion.
//!
//! Only the Anthropic Messages API is wired up; it accepts an image and text
//! in one user turn, which is all the prompt rewrite needs.
//!
//! ```no_run
//! use stillmotion_core::{GenerateRequest, Input, Message, Role};
//! use stillmotion_interface::PromptDriver;
//! use stillmotion_models::AnthropicClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::new("sk-ant-...", "claude-3-5-sonnet-20241022");
//! let message = Message::builder()
//!     .role(Role::User)
//!     .content(vec![Input::Text("Hello".to_string())])
//!     .build()?;
//! let request = GenerateRequest::builder().messages(vec![message]).build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

mod anthropic;

pub use anthropic::{
    ANTHROPIC_API_URL, AnthropicClient, AnthropicContentBlock, AnthropicImageSource,
    AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder,
    AnthropicResponse, AnthropicResponseContent, AnthropicUsage,
};
