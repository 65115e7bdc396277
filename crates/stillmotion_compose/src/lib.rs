//! Prompt composition for stillmotion.
//!
//! Reads the generated image and its reasoning trace, then either asks a
//! vision model to turn them into a video prompt or falls back to the
//! original prompt.
//!
//! # Trace file format
//!
//! ```text
//! <reasoning>
//! --- END OF REASONING ---
//! <prompt>
//! Generating image with prompt: <actual prompt used>   (optional)
//! ```

#![forbid(unsafe_code)]

mod image;
mod instructions;
mod request;
mod rewrite;
mod trace;

pub use image::{load_image, media_type_for};
pub use instructions::{SYSTEM_INSTRUCTION, user_instruction};
pub use request::{RequestOptions, load_request};
pub use rewrite::{RewriteSettings, build_rewrite_request, compose_prompt};
pub use trace::{PROMPT_LABEL, REASONING_DELIMITER, TraceDocument, parse_trace};
