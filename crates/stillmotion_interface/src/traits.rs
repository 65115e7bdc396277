//! Trait definitions for LLM backends and job runners.

use async_trait::async_trait;
use stillmotion_core::{GenerateRequest, GenerateResponse, VideoInvocation};
use stillmotion_error::StillmotionResult;

/// Core trait that all LLM backends must implement.
#[async_trait]
pub trait PromptDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> StillmotionResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// Trait for models that support image inputs (multimodal vision).
pub trait Vision: PromptDriver {
    /// Supported image formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp", "image/gif"]
    }

    /// Maximum image size in bytes.
    fn max_image_size_bytes(&self) -> usize {
        5 * 1024 * 1024 // 5MB default
    }
}

/// Executes a built generator command line.
#[async_trait]
pub trait JobRunner: Send + Sync {
    /// Run to completion and return the child's exit code.
    async fn run(&self, invocation: &VideoInvocation) -> StillmotionResult<i32>;
}
