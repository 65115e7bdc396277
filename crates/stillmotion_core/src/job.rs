//! Parameters of one external video-generation run.

use crate::{ComposedPrompt, VideoSize, VideoTask};
use std::path::PathBuf;

/// Everything needed to build the generator command line.
///
/// # Examples
///
/// ```
/// use stillmotion_core::{ComposedPrompt, FallbackReason, VideoJobSpec, VideoTask};
///
/// let job = VideoJobSpec::builder()
///     .task(VideoTask::T2v14B)
///     .size("1280*720".parse::<stillmotion_core::VideoSize>().unwrap())
///     .checkpoint_dir("./Wan2.1-T2V-14B")
///     .prompt(ComposedPrompt::original("A fox", FallbackReason::Skipped))
///     .build()
///     .unwrap();
///
/// assert!(job.output_dir().is_none());
/// assert!(job.extra_args().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct VideoJobSpec {
    /// Generator task
    task: VideoTask,
    /// Output resolution
    size: VideoSize,
    /// Directory holding the pretrained weights
    checkpoint_dir: PathBuf,
    /// Where the generator writes the video
    #[builder(default)]
    output_dir: Option<PathBuf>,
    /// Prompt text
    prompt: ComposedPrompt,
    /// Arguments forwarded verbatim, in order
    #[builder(default)]
    extra_args: Vec<String>,
}

impl VideoJobSpec {
    /// Creates a new job builder.
    pub fn builder() -> VideoJobSpecBuilder {
        VideoJobSpecBuilder::default()
    }
}
