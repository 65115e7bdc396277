//! Core data types for stillmotion.
//!
//! Two families of types live here: the provider-neutral LLM request types
//! used to ask for a prompt rewrite, and the job types that describe a single
//! image-to-video run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generation;
mod input;
mod invocation;
mod job;
mod media;
mod message;
mod output;
mod prompt;
mod request;
mod role;
mod size;
mod task;

pub use generation::{GenerationRequest, GenerationRequestBuilder, ImageAttachment};
pub use input::Input;
pub use invocation::VideoInvocation;
pub use job::{VideoJobSpec, VideoJobSpecBuilder};
pub use media::MediaSource;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use prompt::{ComposedPrompt, FallbackReason, PromptSource};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use size::VideoSize;
pub use task::VideoTask;
