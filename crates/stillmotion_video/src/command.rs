//! Command-line construction for the generator program.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stillmotion_core::{VideoInvocation, VideoJobSpec};
use tracing::{debug, warn};

/// How to launch the generator.
///
/// ```toml
/// [generator]
/// program = "python3"
/// args = ["generate.py"]
/// working_dir = "/opt/Wan2.1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Executable to run
    pub program: String,
    /// Arguments placed before the generated flags (e.g. the script path)
    pub args: Vec<String>,
    /// Working directory for the child; inherits ours when unset
    pub working_dir: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["generate.py".to_string()],
            working_dir: None,
        }
    }
}

/// Builds the generator command line for `job`.
///
/// Order: leading args, `--task`, `--size`, `--ckpt_dir`, `--prompt`,
/// optional `--output_dir`, then the passthrough args unchanged.
pub fn build_invocation(job: &VideoJobSpec, settings: &GeneratorSettings) -> VideoInvocation {
    if !job.task().supports(job.size()) {
        warn!(
            task = %job.task(),
            size = %job.size(),
            "Size is not among the task's known resolutions; the generator may reject it"
        );
    }

    let mut args = settings.args.clone();
    args.extend([
        "--task".to_string(),
        job.task().to_string(),
        "--size".to_string(),
        job.size().to_string(),
        "--ckpt_dir".to_string(),
        job.checkpoint_dir().display().to_string(),
        "--prompt".to_string(),
        job.prompt().text().to_string(),
    ]);

    if let Some(output_dir) = job.output_dir() {
        args.push("--output_dir".to_string());
        args.push(output_dir.display().to_string());
    }

    args.extend(job.extra_args().iter().cloned());

    debug!(arg_count = args.len(), "Built generator invocation");
    VideoInvocation::new(settings.program.clone(), args, settings.working_dir.clone())
}
