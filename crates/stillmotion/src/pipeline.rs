//! The two-step pipeline: compose the prompt, then run the generator.

use crate::{Cli, RewriteConfig, StillmotionConfig};
use stillmotion_compose::{RequestOptions, compose_prompt, load_request};
use stillmotion_core::{FallbackReason, GenerationRequest, VideoJobSpec};
use stillmotion_error::{
    ConfigError, RewriteError, RewriteErrorKind, StillmotionError, StillmotionResult,
};
use stillmotion_interface::{JobRunner, Vision};
use stillmotion_models::AnthropicClient;
use stillmotion_video::{ProcessRunner, build_invocation};
use tracing::{debug, info, instrument};

/// Runs the pipeline with the Anthropic driver and a real child process.
///
/// Returns the generator's exit code (0 for a dry run).
pub async fn run(cli: &Cli, config: &StillmotionConfig) -> StillmotionResult<i32> {
    let runner = ProcessRunner::new();
    run_with(
        cli,
        config,
        |request| anthropic_driver(request, &config.rewrite),
        &runner,
    )
    .await
}

/// Maps the generator's exit code onto ours; codes outside 0..=255 become 1.
pub fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Builds the Anthropic client for `request`.
///
/// Returns `None` when the rewrite is skipped, and a configuration error
/// when it is not skipped but no API key is available.
pub fn anthropic_driver(
    request: &GenerationRequest,
    rewrite: &RewriteConfig,
) -> StillmotionResult<Option<Box<dyn Vision>>> {
    if request.skip_rewrite() {
        return Ok(None);
    }

    let api_key = request.api_key().ok_or_else(|| {
        ConfigError::new(format!(
            "Anthropic API key required: pass --api-key or set {}, or use --skip-claude",
            rewrite.api_key_env
        ))
    })?;

    let client = AnthropicClient::new(api_key, rewrite.model.clone())
        .with_api_url(rewrite.api_url.clone())
        .with_timeout(rewrite.timeout());
    Ok(Some(Box::new(client)))
}

/// Runs the pipeline with an injected driver factory and job runner.
///
/// Steps, strictly in order:
/// 1. load the image and trace file
/// 2. build the driver with `connect` (skipped rewrites get none)
/// 3. compose the prompt, falling back to the original unless `--require-rewrite`
/// 4. run the generator, or print its command line for `--dry-run`
#[instrument(skip_all, fields(task = %cli.task, size = %cli.size, dry_run = cli.dry_run))]
pub async fn run_with<F>(
    cli: &Cli,
    config: &StillmotionConfig,
    connect: F,
    runner: &dyn JobRunner,
) -> StillmotionResult<i32>
where
    F: FnOnce(&GenerationRequest) -> StillmotionResult<Option<Box<dyn Vision>>>,
{
    let options = RequestOptions {
        image_path: cli.image.clone(),
        text_path: cli.text.clone(),
        skip_rewrite: cli.skip_claude,
        api_key: cli
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| config.rewrite.api_key_from_env()),
    };

    let request = load_request(&options).await?;
    let driver = connect(&request)?;

    let prompt = compose_prompt(&request, driver.as_deref(), &config.rewrite.settings()).await;

    if let Some(reason) = prompt
        .fallback_reason()
        .filter(|reason| cli.require_rewrite && **reason != FallbackReason::Skipped)
    {
        return Err(StillmotionError::from(RewriteError::new(
            RewriteErrorKind::Declined(reason.to_string()),
        )));
    }

    match prompt.fallback_reason() {
        None => println!("Video prompt (rewritten):"),
        Some(reason) => println!("Video prompt (original, {}):", reason),
    }
    println!("{}", prompt);

    let job = VideoJobSpec::builder()
        .task(cli.task)
        .size(cli.size)
        .checkpoint_dir(cli.ckpt_dir.clone())
        .output_dir(cli.output_dir.clone())
        .prompt(prompt)
        .extra_args(cli.passthrough.clone())
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid video job: {}", e)))?;

    let invocation = build_invocation(&job, &config.generator);
    debug!(command = %invocation, "Generator invocation ready");

    if cli.dry_run {
        info!("Dry run, not starting the generator");
        println!("{}", invocation);
        return Ok(0);
    }

    runner.run(&invocation).await
}
