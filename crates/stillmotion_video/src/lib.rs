//! External video generator invocation.
//!
//! The generator is an opaque command-line program. This crate turns a
//! [`VideoJobSpec`](stillmotion_core::VideoJobSpec) into its argument list and
//! runs it with inherited stdio, returning the child's exit code. There are
//! no retries; a failed generation is left to the operator.

#![forbid(unsafe_code)]

mod command;
mod runner;

pub use command::{GeneratorSettings, build_invocation};
pub use runner::ProcessRunner;
