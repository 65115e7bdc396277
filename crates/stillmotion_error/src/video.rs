//! Errors for the external video-generation process.

/// Error kinds for video job operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum VideoErrorKind {
    /// Resolution string is not `WIDTH*HEIGHT`
    #[display("Invalid size '{}': expected WIDTH*HEIGHT", _0)]
    InvalidSize(String),

    /// Generator program could not be started
    #[display("Failed to start video generator: {}", _0)]
    SpawnFailed(String),

    /// Waiting on the child failed
    #[display("Failed to wait for video generator: {}", _0)]
    Wait(String),

    /// Child exited without a status code (killed by a signal)
    #[display("Video generator was terminated by a signal")]
    Terminated,
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Video Error: {} at line {} in {}", kind, line, file)]
pub struct VideoError {
    /// The error kind
    pub kind: VideoErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl VideoError {
    /// Create a new VideoError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VideoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
