//! Errors raised while reading the image and the reasoning trace file.

/// Kinds of input errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InputErrorKind {
    /// Image file does not exist
    #[display("Image file not found: {}", _0)]
    ImageNotFound(String),
    /// Trace file does not exist
    #[display("Text file not found: {}", _0)]
    TextNotFound(String),
    /// File exists but could not be read
    #[display("Failed to read file: {}", _0)]
    Read(String),
    /// Trace file has no end-of-reasoning delimiter line
    #[display("Missing '--- END OF REASONING ---' delimiter in {}", _0)]
    MissingDelimiter(String),
    /// Nothing usable after the delimiter
    #[display("No prompt found after the reasoning in {}", _0)]
    EmptyPrompt(String),
}

/// Input error with location tracking.
///
/// # Examples
///
/// ```
/// use stillmotion_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::MissingDelimiter("trace.txt".to_string()));
/// assert!(format!("{}", err).contains("delimiter"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new input error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
