//! Inputs of a single run, gathered before any network activity.

use std::fmt;
use std::path::PathBuf;

/// Image bytes plus their MIME type.
#[derive(Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ImageAttachment {
    media_type: String,
    bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Wraps already-read image bytes.
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Everything the prompt composer needs, built once from CLI input and file
/// contents.
///
/// # Examples
///
/// ```
/// use stillmotion_core::{GenerationRequest, ImageAttachment};
///
/// let request = GenerationRequest::builder()
///     .image_path("frame.png")
///     .image(ImageAttachment::new("image/png", vec![0x89, 0x50]))
///     .reasoning("Chose warm light.")
///     .original_prompt("A lighthouse at dusk")
///     .build()
///     .unwrap();
///
/// assert!(!request.skip_rewrite());
/// assert!(request.api_key().is_none());
/// ```
#[derive(Clone, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Path the image was read from
    image_path: PathBuf,
    /// Image contents
    image: ImageAttachment,
    /// Reasoning trace (text before the delimiter)
    reasoning: String,
    /// Prompt originally used to produce the image
    original_prompt: String,
    /// Use the original prompt without calling the provider
    #[builder(default)]
    #[getter(skip)]
    skip_rewrite: bool,
    /// Provider credential, if one was found
    #[builder(default)]
    #[getter(skip)]
    api_key: Option<String>,
}

impl GenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Whether rewriting was disabled.
    pub fn skip_rewrite(&self) -> bool {
        self.skip_rewrite
    }

    /// Provider credential.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("image_path", &self.image_path)
            .field("image", &self.image)
            .field("reasoning_len", &self.reasoning.len())
            .field("original_prompt", &self.original_prompt)
            .field("skip_rewrite", &self.skip_rewrite)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
