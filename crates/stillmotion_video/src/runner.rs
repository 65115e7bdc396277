//! Child process execution.

use async_trait::async_trait;
use std::process::Stdio;
use stillmotion_core::VideoInvocation;
use stillmotion_error::{StillmotionResult, VideoError, VideoErrorKind};
use stillmotion_interface::JobRunner;
use tokio::process::Command;
use tracing::{debug, error, info, instrument, warn};

/// Runs the generator as a child process with inherited stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Creates a runner.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JobRunner for ProcessRunner {
    #[instrument(skip_all, fields(program = %invocation.program()))]
    async fn run(&self, invocation: &VideoInvocation) -> StillmotionResult<i32> {
        info!(command = %invocation, "Starting video generator");

        let mut command = Command::new(invocation.program());
        command
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = invocation.working_dir() {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|e| {
            error!(error = %e, "Failed to spawn video generator");
            VideoError::new(VideoErrorKind::SpawnFailed(format!(
                "{}: {}",
                invocation.program(),
                e
            )))
        })?;

        debug!(pid = ?child.id(), "Video generator spawned");

        let status = child
            .wait()
            .await
            .map_err(|e| VideoError::new(VideoErrorKind::Wait(e.to_string())))?;

        match status.code() {
            Some(0) => {
                info!("Video generation completed successfully");
                Ok(0)
            }
            Some(code) => {
                warn!(code, "Video generation failed");
                Ok(code)
            }
            None => {
                error!("Video generator terminated by signal");
                Err(VideoError::new(VideoErrorKind::Terminated).into())
            }
        }
    }
}
