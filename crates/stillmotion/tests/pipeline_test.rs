//! End-to-end pipeline tests with a mock driver and a recording runner.

mod test_utils;

use std::cell::Cell;
use stillmotion::{
    Cli, InputErrorKind, RewriteErrorKind, StillmotionConfig, StillmotionErrorKind,
    anthropic_driver, run_with,
};
use tempfile::TempDir;
use test_utils::{MockVision, ORIGINAL_PROMPT, RecordingRunner, write_inputs};

fn cli(dir: &TempDir, extra: &[&str]) -> Cli {
    let (image, text) = write_inputs(dir.path());
    let mut args = vec![
        "stillmotion".to_string(),
        "--image".to_string(),
        image.display().to_string(),
        "--text".to_string(),
        text.display().to_string(),
    ];
    args.extend(extra.iter().map(|arg| arg.to_string()));
    Cli::try_parse_with_passthrough(args).unwrap()
}

fn config_without_env_key() -> StillmotionConfig {
    let mut config = StillmotionConfig::default();
    config.rewrite.api_key_env = "STILLMOTION_TEST_KEY_THAT_IS_NEVER_SET".to_string();
    config
}

#[tokio::test]
async fn test_skip_uses_original_prompt_without_credentials() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &["--skip-claude"]);
    let config = config_without_env_key();
    let runner = RecordingRunner::exiting_with(0);

    let code = run_with(
        &cli,
        &config,
        |request| anthropic_driver(request, &config.rewrite),
        &runner,
    )
    .await?;

    assert_eq!(code, 0);
    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].flag_value("--prompt"), Some(ORIGINAL_PROMPT));
    Ok(())
}

#[tokio::test]
async fn test_rewritten_prompt_reaches_generator() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &["--api-key", "sk-test"]);
    let driver = MockVision::answering("Slow dolly-in on the lighthouse as lightning flashes.");
    let runner = RecordingRunner::exiting_with(0);

    run_with(
        &cli,
        &StillmotionConfig::default(),
        |_| Ok(Some(driver.boxed())),
        &runner,
    )
    .await?;

    assert_eq!(driver.call_count(), 1);
    assert_eq!(
        runner.invocations()[0].flag_value("--prompt"),
        Some("Slow dolly-in on the lighthouse as lightning flashes.")
    );
    Ok(())
}

#[tokio::test]
async fn test_rewrite_failure_falls_back_and_forwards_exit_code() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &["--api-key", "sk-test"]);
    let driver = MockVision::failing(RewriteErrorKind::Api {
        status: 529,
        message: "overloaded".to_string(),
    });
    let runner = RecordingRunner::exiting_with(7);

    let code = run_with(
        &cli,
        &StillmotionConfig::default(),
        |_| Ok(Some(driver.boxed())),
        &runner,
    )
    .await?;

    assert_eq!(code, 7);
    assert_eq!(driver.call_count(), 1);
    assert_eq!(
        runner.invocations()[0].flag_value("--prompt"),
        Some(ORIGINAL_PROMPT)
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_image_fails_before_any_driver_is_built() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut cli = cli(&dir, &["--api-key", "sk-test"]);
    cli.image = dir.path().join("missing.png");
    let connected = Cell::new(false);
    let runner = RecordingRunner::exiting_with(0);

    let err = run_with(
        &cli,
        &StillmotionConfig::default(),
        |_| {
            connected.set(true);
            Ok(None)
        },
        &runner,
    )
    .await
    .unwrap_err();

    match err.kind() {
        StillmotionErrorKind::Input(e) => {
            assert!(matches!(e.kind, InputErrorKind::ImageNotFound(_)))
        }
        other => panic!("expected input error, got {other}"),
    }
    assert!(!connected.get());
    assert!(runner.invocations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_key_is_fatal_unless_skipped() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &[]);
    let config = config_without_env_key();
    let runner = RecordingRunner::exiting_with(0);

    let err = run_with(
        &cli,
        &config,
        |request| anthropic_driver(request, &config.rewrite),
        &runner,
    )
    .await
    .unwrap_err();

    assert!(matches!(err.kind(), StillmotionErrorKind::Config(_)));
    assert!(err.to_string().contains("STILLMOTION_TEST_KEY_THAT_IS_NEVER_SET"));
    assert!(runner.invocations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_require_rewrite_refuses_fallback() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &["--api-key", "sk-test", "--require-rewrite"]);
    let driver = MockVision::failing(RewriteErrorKind::Http("connection refused".to_string()));
    let runner = RecordingRunner::exiting_with(0);

    let err = run_with(
        &cli,
        &StillmotionConfig::default(),
        |_| Ok(Some(driver.boxed())),
        &runner,
    )
    .await
    .unwrap_err();

    match err.kind() {
        StillmotionErrorKind::Rewrite(e) => {
            assert!(matches!(e.kind, RewriteErrorKind::Declined(_)))
        }
        other => panic!("expected rewrite error, got {other}"),
    }
    assert!(runner.invocations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_require_rewrite_passes_when_rewrite_succeeds() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &["--api-key", "sk-test", "--require-rewrite"]);
    let driver = MockVision::answering("Crane shot rising over the cliff.");
    let runner = RecordingRunner::exiting_with(0);

    let code = run_with(
        &cli,
        &StillmotionConfig::default(),
        |_| Ok(Some(driver.boxed())),
        &runner,
    )
    .await?;

    assert_eq!(code, 0);
    assert_eq!(runner.invocations().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_dry_run_does_not_start_generator() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(&dir, &["--skip-claude", "--dry-run"]);
    let runner = RecordingRunner::exiting_with(9);

    let code = run_with(&cli, &StillmotionConfig::default(), |_| Ok(None), &runner).await?;

    assert_eq!(code, 0);
    assert!(runner.invocations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_job_flags_and_passthrough_reach_generator() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cli = cli(
        &dir,
        &[
            "--skip-claude",
            "--sample_steps",
            "40",
            "--task",
            "i2v-14B",
            "--size=832*480",
            "--ckpt_dir",
            "/models/i2v",
            "--output_dir",
            "/tmp/out",
            "--",
            "--offload_model",
            "True",
        ],
    );
    let runner = RecordingRunner::exiting_with(0);

    run_with(&cli, &StillmotionConfig::default(), |_| Ok(None), &runner).await?;

    let invocation = &runner.invocations()[0];
    assert_eq!(invocation.program(), "python3");
    assert_eq!(invocation.flag_value("--task"), Some("i2v-14B"));
    assert_eq!(invocation.flag_value("--size"), Some("832*480"));
    assert_eq!(invocation.flag_value("--ckpt_dir"), Some("/models/i2v"));
    assert_eq!(invocation.flag_value("--output_dir"), Some("/tmp/out"));

    let args = invocation.args();
    assert_eq!(
        &args[args.len() - 4..],
        &["--sample_steps", "40", "--offload_model", "True"]
    );
    Ok(())
}
