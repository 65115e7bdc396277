//! Error types for stillmotion.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use stillmotion_error::{InputError, InputErrorKind, StillmotionResult};
//!
//! fn load() -> StillmotionResult<String> {
//!     Err(InputError::new(InputErrorKind::ImageNotFound("missing.png".to_string())))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod input;
mod rewrite;
mod video;

pub use config::ConfigError;
pub use error::{StillmotionError, StillmotionErrorKind, StillmotionResult};
pub use input::{InputError, InputErrorKind};
pub use rewrite::{RewriteError, RewriteErrorKind};
pub use video::{VideoError, VideoErrorKind};
