//! Tests for loading inputs from disk.

use std::path::PathBuf;
use stillmotion_compose::{RequestOptions, load_request};
use stillmotion_error::{InputErrorKind, StillmotionErrorKind};
use tempfile::TempDir;

fn write_inputs(dir: &TempDir, trace: &str) -> (PathBuf, PathBuf) {
    let image = dir.path().join("generated_image.jpeg");
    let text = dir.path().join("prompt+reasoning.txt");
    std::fs::write(&image, [0xff, 0xd8, 0xff, 0xe0]).unwrap();
    std::fs::write(&text, trace).unwrap();
    (image, text)
}

fn input_kind(err: &stillmotion_error::StillmotionError) -> InputErrorKind {
    match err.kind() {
        StillmotionErrorKind::Input(input) => input.kind.clone(),
        other => panic!("expected input error, got {}", other),
    }
}

#[tokio::test]
async fn test_load_request_reads_both_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (image, text) = write_inputs(&dir, "why\n--- END OF REASONING ---\nA fox");

    let request = load_request(&RequestOptions {
        image_path: image.clone(),
        text_path: text,
        skip_rewrite: true,
        api_key: Some("key".to_string()),
    })
    .await?;

    assert_eq!(request.image_path(), &image);
    assert_eq!(request.image().media_type(), "image/jpeg");
    assert_eq!(request.image().bytes().len(), 4);
    assert_eq!(request.reasoning(), "why");
    assert_eq!(request.original_prompt(), "A fox");
    assert!(request.skip_rewrite());
    assert_eq!(request.api_key(), Some("key"));
    Ok(())
}

#[tokio::test]
async fn test_missing_image_reported_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let err = load_request(&RequestOptions {
        image_path: dir.path().join("nope.png"),
        text_path: dir.path().join("also_missing.txt"),
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(input_kind(&err), InputErrorKind::ImageNotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_missing_text_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (image, _) = write_inputs(&dir, "unused");

    let err = load_request(&RequestOptions {
        image_path: image,
        text_path: dir.path().join("missing.txt"),
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(input_kind(&err), InputErrorKind::TextNotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_malformed_text_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (image, text) = write_inputs(&dir, "no delimiter anywhere");

    let err = load_request(&RequestOptions {
        image_path: image,
        text_path: text,
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(
        input_kind(&err),
        InputErrorKind::MissingDelimiter(_)
    ));
    Ok(())
}
