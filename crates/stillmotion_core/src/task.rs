//! Generation tasks understood by the external video generator.

use crate::VideoSize;
use serde::{Deserialize, Serialize};

/// Task passed to the generator's `--task` flag.
///
/// The string forms match the generator's task names exactly.
///
/// ```
/// use stillmotion_core::VideoTask;
///
/// let task: VideoTask = "t2v-1.3B".parse().unwrap();
/// assert_eq!(task, VideoTask::T2v1_3B);
/// assert_eq!(task.to_string(), "t2v-1.3B");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum VideoTask {
    /// Text-to-video, 14B parameters
    #[default]
    #[strum(serialize = "t2v-14B")]
    #[serde(rename = "t2v-14B")]
    T2v14B,
    /// Text-to-video, 1.3B parameters
    #[strum(serialize = "t2v-1.3B")]
    #[serde(rename = "t2v-1.3B")]
    T2v1_3B,
    /// Image-to-video, 14B parameters
    #[strum(serialize = "i2v-14B")]
    #[serde(rename = "i2v-14B")]
    I2v14B,
    /// Text-to-image, 14B parameters
    #[strum(serialize = "t2i-14B")]
    #[serde(rename = "t2i-14B")]
    T2i14B,
    /// First-last-frame-to-video, 14B parameters
    #[strum(serialize = "flf2v-14B")]
    #[serde(rename = "flf2v-14B")]
    Flf2v14B,
    /// All-in-one video creation and editing, 1.3B parameters
    #[strum(serialize = "vace-1.3B")]
    #[serde(rename = "vace-1.3B")]
    Vace1_3B,
    /// All-in-one video creation and editing, 14B parameters
    #[strum(serialize = "vace-14B")]
    #[serde(rename = "vace-14B")]
    Vace14B,
}

const SIZES_480P: &[(u32, u32)] = &[(480, 832), (832, 480)];
const SIZES_720P: &[(u32, u32)] = &[(720, 1280), (1280, 720), (480, 832), (832, 480)];
const SIZES_IMAGE: &[(u32, u32)] = &[
    (720, 1280),
    (1280, 720),
    (480, 832),
    (832, 480),
    (1024, 1024),
];

impl VideoTask {
    /// Resolutions the generator accepts for this task.
    pub fn supported_sizes(&self) -> Vec<VideoSize> {
        let sizes = match self {
            Self::T2v1_3B | Self::Vace1_3B => SIZES_480P,
            Self::T2i14B => SIZES_IMAGE,
            Self::T2v14B | Self::I2v14B | Self::Flf2v14B | Self::Vace14B => SIZES_720P,
        };
        sizes
            .iter()
            .map(|&(width, height)| VideoSize::new(width, height))
            .collect()
    }

    /// Whether the generator is known to accept `size` for this task.
    pub fn supports(&self, size: &VideoSize) -> bool {
        self.supported_sizes().contains(size)
    }
}
