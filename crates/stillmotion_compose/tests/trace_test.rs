//! Tests for reasoning trace parsing.

use stillmotion_compose::{REASONING_DELIMITER, parse_trace};
use stillmotion_error::InputErrorKind;

#[test]
fn test_well_formed_trace_splits_exactly() {
    let reasoning = "The user asked for a cozy scene.\n\nI chose warm amber light\nand a low camera.";
    let prompt = "A cat asleep on a windowsill, rain outside, warm lamp light";
    let content = format!("{}\n{}\n{}", reasoning, REASONING_DELIMITER, prompt);

    let doc = parse_trace(&content, "trace.txt").unwrap();

    assert_eq!(doc.reasoning(), reasoning);
    assert_eq!(doc.original_prompt(), prompt);
}

#[test]
fn test_multiline_prompt_block_kept_verbatim() {
    let content = format!(
        "why\n{}\nLine one of the prompt\nLine two of the prompt\n",
        REASONING_DELIMITER
    );

    let doc = parse_trace(&content, "trace.txt").unwrap();

    assert_eq!(
        doc.original_prompt(),
        "Line one of the prompt\nLine two of the prompt"
    );
}

#[test]
fn test_labelled_prompt_preferred() {
    let content = format!(
        "why\n{}\nDraft: a fox\n\nGenerating image with prompt: Cartoon fox in a snowy forest\n",
        REASONING_DELIMITER
    );

    let doc = parse_trace(&content, "trace.txt").unwrap();

    assert_eq!(doc.reasoning(), "why");
    assert_eq!(doc.original_prompt(), "Cartoon fox in a snowy forest");
}

#[test]
fn test_only_first_delimiter_splits() {
    let content = format!(
        "why\n{d}\nprompt with\n{d}\ninside",
        d = REASONING_DELIMITER
    );

    let doc = parse_trace(&content, "trace.txt").unwrap();

    assert_eq!(doc.reasoning(), "why");
    assert_eq!(
        *doc.original_prompt(),
        format!("prompt with\n{}\ninside", REASONING_DELIMITER)
    );
}

#[test]
fn test_missing_delimiter_is_distinct_error() {
    let err = parse_trace("just some text\nwith no marker", "trace.txt").unwrap_err();
    assert_eq!(
        err.kind,
        InputErrorKind::MissingDelimiter("trace.txt".to_string())
    );
}

#[test]
fn test_nothing_after_delimiter_is_error() {
    let content = format!("reasoning only\n{}\n   \n", REASONING_DELIMITER);
    let err = parse_trace(&content, "trace.txt").unwrap_err();
    assert_eq!(err.kind, InputErrorKind::EmptyPrompt("trace.txt".to_string()));
}

#[test]
fn test_empty_reasoning_allowed() {
    let content = format!("{}\nA prompt", REASONING_DELIMITER);
    let doc = parse_trace(&content, "trace.txt").unwrap();
    assert_eq!(doc.reasoning(), "");
    assert_eq!(doc.original_prompt(), "A prompt");
}

#[test]
fn test_label_found_mid_line() {
    let content = format!(
        "why\n{}\nDraft idea\n[info] Generating image with prompt: Cartoon fox in snow\n",
        REASONING_DELIMITER
    );

    let doc = parse_trace(&content, "trace.txt").unwrap();

    assert_eq!(doc.original_prompt(), "Cartoon fox in snow");
}

#[test]
fn test_empty_label_falls_back_to_prompt_block() {
    let content = format!(
        "why\n{}\nA fox in snow\nGenerating image with prompt:\n",
        REASONING_DELIMITER
    );

    let doc = parse_trace(&content, "trace.txt").unwrap();

    assert_eq!(
        doc.original_prompt(),
        "A fox in snow\nGenerating image with prompt:"
    );
}
