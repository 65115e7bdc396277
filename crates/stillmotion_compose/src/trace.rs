//! Reasoning trace file parser.

use stillmotion_error::{InputError, InputErrorKind};
use tracing::debug;

/// Line separating the reasoning from the prompt.
pub const REASONING_DELIMITER: &str = "--- END OF REASONING ---";

/// Label that introduces the prompt actually sent to the image model.
pub const PROMPT_LABEL: &str = "Generating image with prompt:";

/// Reasoning and prompt extracted from a trace file.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct TraceDocument {
    reasoning: String,
    original_prompt: String,
}

/// Splits trace file contents at the delimiter line.
///
/// `origin` names the file in error messages. When the text after the
/// delimiter contains a [`PROMPT_LABEL`], the labelled prompt wins over the
/// prompt block. An empty labelled prompt falls back to the whole block.
///
/// ```
/// use stillmotion_compose::parse_trace;
///
/// let content = "Warm palette.\n--- END OF REASONING ---\nA fox in snow";
/// let doc = parse_trace(content, "trace.txt").unwrap();
/// assert_eq!(doc.reasoning(), "Warm palette.");
/// assert_eq!(doc.original_prompt(), "A fox in snow");
/// ```
pub fn parse_trace(content: &str, origin: &str) -> Result<TraceDocument, InputError> {
    let (start, end) = find_delimiter(content).ok_or_else(|| {
        InputError::new(InputErrorKind::MissingDelimiter(origin.to_string()))
    })?;

    let reasoning = content[..start].trim();
    let remaining = content[end..].trim();

    let original_prompt = match labelled_prompt(remaining) {
        Some(prompt) => {
            debug!("Using labelled prompt from trace");
            prompt
        }
        None => remaining.to_string(),
    };

    if original_prompt.is_empty() {
        return Err(InputError::new(InputErrorKind::EmptyPrompt(
            origin.to_string(),
        )));
    }

    Ok(TraceDocument {
        reasoning: reasoning.to_string(),
        original_prompt,
    })
}

/// Byte range of the first delimiter line, including its line ending.
fn find_delimiter(content: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.trim() == REASONING_DELIMITER {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

/// Text after the first [`PROMPT_LABEL`], wherever it sits in its line,
/// joined with the non-empty lines that follow. `None` when there is no label
/// or nothing follows it.
fn labelled_prompt(block: &str) -> Option<String> {
    let mut lines = block.lines().skip_while(|line| !line.contains(PROMPT_LABEL));
    let first = lines.next()?;
    let first = first
        .split_once(PROMPT_LABEL)
        .map_or(first, |(_, after)| after);

    let parts: Vec<&str> = std::iter::once(first)
        .chain(lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_must_be_whole_line() {
        let content = "I wrote --- END OF REASONING --- inline\nA fox";
        assert!(find_delimiter(content).is_none());
    }

    #[test]
    fn test_crlf_delimiter() {
        let content = "why\r\n--- END OF REASONING ---\r\nA fox\r\n";
        let doc = parse_trace(content, "t.txt").unwrap();
        assert_eq!(doc.reasoning(), "why");
        assert_eq!(doc.original_prompt(), "A fox");
    }

    #[test]
    fn test_labelled_prompt_joins_continuation_lines() {
        let block = "draft prompt\nGenerating image with prompt: Cartoon fox,\n\n  bright colors\n";
        assert_eq!(
            labelled_prompt(block).as_deref(),
            Some("Cartoon fox, bright colors")
        );
    }

    #[test]
    fn test_no_label_returns_none() {
        assert!(labelled_prompt("just a prompt").is_none());
    }

    #[test]
    fn test_label_without_text_returns_none() {
        assert!(labelled_prompt("A fox\nGenerating image with prompt:\n  \n").is_none());
    }
}
