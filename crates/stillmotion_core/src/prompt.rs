//! The prompt handed to the video generator.

use serde::{Deserialize, Serialize};

/// Why the original prompt was used instead of a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FallbackReason {
    /// Rewriting was disabled by the caller
    #[display("rewrite skipped")]
    Skipped,
    /// The provider call failed
    #[display("rewrite failed: {}", _0)]
    RewriteFailed(String),
    /// The provider answered without any text
    #[display("rewrite returned no text")]
    EmptyResponse,
}

/// Where the composed prompt came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptSource {
    /// Rewritten by the named model
    Rewritten {
        /// Model that produced the rewrite
        model: String,
    },
    /// Original prompt from the trace file
    Original(FallbackReason),
}

/// Final text fed to the video generator.
///
/// # Examples
///
/// ```
/// use stillmotion_core::{ComposedPrompt, FallbackReason};
///
/// let prompt = ComposedPrompt::original("A fox in snow", FallbackReason::Skipped);
/// assert_eq!(prompt.text(), "A fox in snow");
/// assert!(!prompt.is_rewritten());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{}", text)]
pub struct ComposedPrompt {
    text: String,
    source: PromptSource,
}

impl ComposedPrompt {
    /// Prompt produced by a model rewrite.
    pub fn rewritten(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: PromptSource::Rewritten {
                model: model.into(),
            },
        }
    }

    /// Original prompt used verbatim.
    pub fn original(text: impl Into<String>, reason: FallbackReason) -> Self {
        Self {
            text: text.into(),
            source: PromptSource::Original(reason),
        }
    }

    /// Prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Provenance of the text.
    pub fn source(&self) -> &PromptSource {
        &self.source
    }

    /// True when a model produced the text.
    pub fn is_rewritten(&self) -> bool {
        matches!(self.source, PromptSource::Rewritten { .. })
    }

    /// Fallback reason, if the original prompt was used.
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match &self.source {
            PromptSource::Original(reason) => Some(reason),
            PromptSource::Rewritten { .. } => None,
        }
    }
}
