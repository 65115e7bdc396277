//! Trait definitions for stillmotion.
//!
//! The pipeline talks to the outside world through two seams: a model
//! backend that rewrites prompts, and a runner that executes the external
//! video generator.

mod traits;

pub use traits::{JobRunner, PromptDriver, Vision};
