//! Top-level error wrapper types.

use crate::{ConfigError, InputError, RewriteError, VideoError};

/// The foundation error enum.
///
/// # Examples
///
/// ```
/// use stillmotion_error::{ConfigError, StillmotionError};
///
/// let err: StillmotionError = ConfigError::new("missing key").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StillmotionErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Image or trace file error
    #[from(InputError)]
    Input(InputError),
    /// LLM rewrite error
    #[from(RewriteError)]
    Rewrite(RewriteError),
    /// External generator error
    #[from(VideoError)]
    Video(VideoError),
}

/// Stillmotion error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Stillmotion Error: {}", _0)]
pub struct StillmotionError(Box<StillmotionErrorKind>);

impl StillmotionError {
    /// Create a new error from a kind.
    pub fn new(kind: StillmotionErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StillmotionErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StillmotionErrorKind
impl<T> From<T> for StillmotionError
where
    T: Into<StillmotionErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for stillmotion operations.
pub type StillmotionResult<T> = std::result::Result<T, StillmotionError>;
