//! Prompt rewriting with fallback to the original prompt.

use crate::{SYSTEM_INSTRUCTION, user_instruction};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use stillmotion_core::{
    ComposedPrompt, FallbackReason, GenerateRequest, GenerationRequest, Input, MediaSource,
    Message, Role,
};
use stillmotion_interface::Vision;
use tracing::{debug, info, instrument, warn};

/// Sampling parameters for the rewrite call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteSettings {
    /// Model identifier
    pub model: String,
    /// Maximum tokens in the rewritten prompt
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Builds the multimodal request: image first, then the instruction text.
pub fn build_rewrite_request(
    request: &GenerationRequest,
    settings: &RewriteSettings,
) -> GenerateRequest {
    let image = Input::Image {
        mime: Some(request.image().media_type().clone()),
        source: MediaSource::Base64(STANDARD.encode(request.image().bytes())),
    };
    let text = Input::Text(user_instruction(
        request.reasoning(),
        request.original_prompt(),
    ));

    GenerateRequest {
        system: Some(SYSTEM_INSTRUCTION.to_string()),
        messages: vec![Message {
            role: Role::User,
            content: vec![image, text],
        }],
        max_tokens: Some(settings.max_tokens),
        temperature: Some(settings.temperature),
        model: Some(settings.model.clone()),
    }
}

/// Produces the prompt for the video generator.
///
/// Never fails: when rewriting is skipped, impossible or unsuccessful, the
/// original prompt is returned and the reason is recorded on the result.
#[instrument(skip_all, fields(skip = request.skip_rewrite()))]
pub async fn compose_prompt(
    request: &GenerationRequest,
    driver: Option<&dyn Vision>,
    settings: &RewriteSettings,
) -> ComposedPrompt {
    let original = request.original_prompt();

    if request.skip_rewrite() {
        info!("Skipping rewrite, using original prompt");
        return ComposedPrompt::original(original.clone(), FallbackReason::Skipped);
    }

    let Some(driver) = driver else {
        warn!("No prompt driver available, using original prompt");
        return ComposedPrompt::original(
            original.clone(),
            FallbackReason::RewriteFailed("no API credential available".to_string()),
        );
    };

    if let Some(problem) = image_problem(request, driver) {
        warn!(%problem, "Image cannot be sent, using original prompt");
        return ComposedPrompt::original(original.clone(), FallbackReason::RewriteFailed(problem));
    }

    info!(
        provider = driver.provider_name(),
        model = %settings.model,
        "Requesting video prompt rewrite"
    );

    let generate_request = build_rewrite_request(request, settings);
    match driver.generate(&generate_request).await {
        Ok(response) => match response.first_text() {
            Some(text) => {
                debug!(len = text.len(), "Received rewritten prompt");
                ComposedPrompt::rewritten(text, settings.model.clone())
            }
            None => {
                warn!("Rewrite returned no text, using original prompt");
                ComposedPrompt::original(original.clone(), FallbackReason::EmptyResponse)
            }
        },
        Err(e) => {
            warn!(error = %e, "Rewrite failed, falling back to original prompt");
            ComposedPrompt::original(
                original.clone(),
                FallbackReason::RewriteFailed(e.to_string()),
            )
        }
    }
}

fn image_problem(request: &GenerationRequest, driver: &dyn Vision) -> Option<String> {
    let image = request.image();
    if !driver
        .supported_image_formats()
        .iter()
        .any(|format| image.media_type().as_str() == *format)
    {
        return Some(format!(
            "{} does not accept {} images",
            driver.provider_name(),
            image.media_type()
        ));
    }
    if image.bytes().len() > driver.max_image_size_bytes() {
        return Some(format!(
            "image is {} bytes, {} accepts at most {}",
            image.bytes().len(),
            driver.provider_name(),
            driver.max_image_size_bytes()
        ));
    }
    None
}
