//! Output resolution in the generator's `WIDTH*HEIGHT` notation.

use serde::{Deserialize, Serialize};
use stillmotion_error::{VideoError, VideoErrorKind};
use std::str::FromStr;

/// Video resolution.
///
/// # Examples
///
/// ```
/// use stillmotion_core::VideoSize;
///
/// let size: VideoSize = "1280*720".parse().unwrap();
/// assert_eq!(*size.width(), 1280);
/// assert_eq!(*size.height(), 720);
/// assert_eq!(size.to_string(), "1280*720");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{}*{}", width, height)]
pub struct VideoSize {
    width: u32,
    height: u32,
}

impl VideoSize {
    /// Creates a size from explicit dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for VideoSize {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

impl FromStr for VideoSize {
    type Err = VideoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VideoError::new(VideoErrorKind::InvalidSize(s.to_string()));

        let (width, height) = s.split_once('*').ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}
