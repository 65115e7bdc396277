//! stillmotion: turn a generated image into a video.
//!
//! The pipeline has two steps that run strictly in sequence:
//!
//! 1. **Prompt composition**: read the image and its reasoning trace, ask a
//!    vision model for a cinematic video prompt, fall back to the original
//!    prompt when that is skipped or fails.
//! 2. **Video invocation**: run the external video generator with the
//!    composed prompt and forward its exit code.
//!
//! This crate re-exports the workspace crates and adds configuration, the
//! CLI definition and the pipeline that ties them together.

#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod pipeline;

pub use cli::{Cli, split_known_args};
pub use config::{RewriteConfig, StillmotionConfig};
pub use logging::init_tracing;
pub use pipeline::{anthropic_driver, exit_status, run, run_with};

pub use stillmotion_compose::{
    RequestOptions, RewriteSettings, compose_prompt, load_request, parse_trace,
};
pub use stillmotion_core::{
    ComposedPrompt, FallbackReason, GenerationRequest, PromptSource, VideoInvocation,
    VideoJobSpec, VideoSize, VideoTask,
};
pub use stillmotion_error::{
    ConfigError, InputError, InputErrorKind, RewriteError, RewriteErrorKind, StillmotionError,
    StillmotionErrorKind, StillmotionResult, VideoError, VideoErrorKind,
};
pub use stillmotion_interface::{JobRunner, PromptDriver, Vision};
pub use stillmotion_models::AnthropicClient;
pub use stillmotion_video::{GeneratorSettings, ProcessRunner, build_invocation};
