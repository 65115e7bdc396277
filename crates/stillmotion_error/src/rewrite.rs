//! Prompt rewrite (LLM provider) errors.

/// Rewrite-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RewriteErrorKind {
    /// Transport-level failure (DNS, connect, timeout)
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Provider answered with a non-2xx status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body could not be decoded
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Request or response builder failed
    #[display("Builder error: {}", _0)]
    Builder(String),

    /// Provider returned no usable text
    #[display("Empty response from {}", _0)]
    EmptyResponse(String),

    /// Fallback to the original prompt refused
    #[display("Rewrite required but unavailable: {}", _0)]
    Declined(String),
}

/// Rewrite error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Rewrite Error: {} at {}:{}", kind, file, line)]
pub struct RewriteError {
    /// The specific error kind
    pub kind: RewriteErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl RewriteError {
    /// Create a new rewrite error.
    #[track_caller]
    pub fn new(kind: RewriteErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<RewriteErrorKind> for RewriteError {
    #[track_caller]
    fn from(kind: RewriteErrorKind) -> Self {
        Self::new(kind)
    }
}
