//! Assembling a [`GenerationRequest`] from the filesystem.

use crate::{load_image, parse_trace};
use std::path::PathBuf;
use stillmotion_core::GenerationRequest;
use stillmotion_error::{InputError, InputErrorKind, StillmotionResult};
use tracing::{info, instrument};

/// Where to read inputs from, and how the prompt should be composed.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Generated image
    pub image_path: PathBuf,
    /// Reasoning trace file
    pub text_path: PathBuf,
    /// Use the original prompt without calling the provider
    pub skip_rewrite: bool,
    /// Provider credential
    pub api_key: Option<String>,
}

/// Reads the image and the trace file.
///
/// The image is checked first, so a missing image is reported even when the
/// trace file is also broken. Nothing here touches the network.
#[instrument(
    skip(options),
    fields(
        image = %options.image_path.display(),
        text = %options.text_path.display()
    )
)]
pub async fn load_request(options: &RequestOptions) -> StillmotionResult<GenerationRequest> {
    let image = load_image(&options.image_path).await?;

    let origin = options.text_path.display().to_string();
    let content = tokio::fs::read_to_string(&options.text_path)
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InputError::new(InputErrorKind::TextNotFound(origin.clone()))
            } else {
                InputError::new(InputErrorKind::Read(format!("{}: {}", origin, e)))
            }
        })?;

    let trace = parse_trace(&content, &origin)?;

    info!(
        prompt_len = trace.original_prompt().len(),
        reasoning_len = trace.reasoning().len(),
        "Read reasoning and original prompt"
    );

    let request = GenerationRequest::builder()
        .image_path(options.image_path.clone())
        .image(image)
        .reasoning(trace.reasoning().clone())
        .original_prompt(trace.original_prompt().clone())
        .skip_rewrite(options.skip_rewrite)
        .api_key(options.api_key.clone())
        .build()
        .map_err(|e| InputError::new(InputErrorKind::Read(e.to_string())))?;

    Ok(request)
}
