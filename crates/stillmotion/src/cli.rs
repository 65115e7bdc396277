//! Command-line definition and passthrough argument handling.

use clap::{Command, CommandFactory, Parser};
use std::path::PathBuf;
use stillmotion_core::{VideoSize, VideoTask};

/// stillmotion - turn a generated image and its reasoning trace into a video
///
/// Arguments this program does not recognise are forwarded to the video
/// generator unchanged, as is everything after `--`.
#[derive(Parser, Debug, Clone)]
#[command(name = "stillmotion")]
#[command(about = "Turn a generated image and its reasoning trace into a video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Generated image to animate
    #[arg(long, default_value = "video_gen_prompts/generated_image.png")]
    pub image: PathBuf,

    /// Reasoning trace file holding the original prompt
    #[arg(long, default_value = "video_gen_prompts/prompt+reasoning.txt")]
    pub text: PathBuf,

    /// Anthropic API key (defaults to the ANTHROPIC_API_KEY environment variable)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Generator task
    #[arg(long, default_value = "t2v-14B")]
    pub task: VideoTask,

    /// Output resolution as WIDTH*HEIGHT
    #[arg(long, default_value = "1280*720")]
    pub size: VideoSize,

    /// Model checkpoint directory
    #[arg(long = "ckpt_dir", default_value = "./Wan2.1-T2V-14B")]
    pub ckpt_dir: PathBuf,

    /// Where the generator writes its output
    #[arg(long = "output_dir")]
    pub output_dir: Option<PathBuf>,

    /// Use the original prompt without calling the rewrite model
    #[arg(long = "skip-claude")]
    pub skip_claude: bool,

    /// Abort instead of falling back when the rewrite fails
    #[arg(long = "require-rewrite", conflicts_with = "skip_claude")]
    pub require_rewrite: bool,

    /// Print the generator command instead of running it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Configuration file replacing the layered defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Unrecognised arguments, forwarded to the generator
    #[arg(skip)]
    pub passthrough: Vec<String>,
}

impl Cli {
    /// Parses `args` (program name first), splitting off passthrough arguments.
    ///
    /// Exits the process on invalid input, like [`Parser::parse_from`].
    pub fn parse_with_passthrough<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let (known, passthrough) =
            split_known_args(&Self::command(), args.into_iter().map(Into::into));
        let mut cli = Self::parse_from(known);
        cli.passthrough = passthrough;
        cli
    }

    /// Fallible variant of [`Cli::parse_with_passthrough`].
    pub fn try_parse_with_passthrough<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let (known, passthrough) =
            split_known_args(&Self::command(), args.into_iter().map(Into::into));
        let mut cli = Self::try_parse_from(known)?;
        cli.passthrough = passthrough;
        Ok(cli)
    }
}

/// Separates the arguments `command` recognises from everything else.
///
/// The first element (program name) always stays with the known arguments.
/// A recognised option that takes a value also claims the next token unless
/// the value is attached (`--size=832*480`). Unrecognised tokens and all
/// tokens after `--` are returned second, in their original order.
pub fn split_known_args(
    command: &Command,
    args: impl IntoIterator<Item = String>,
) -> (Vec<String>, Vec<String>) {
    let mut command = command.clone();
    command.build();

    let mut args = args.into_iter();
    let mut known: Vec<String> = args.next().into_iter().collect();
    let mut passthrough = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            passthrough.extend(args.by_ref());
            break;
        }

        match lookup(&command, &arg) {
            Some(Recognised { claims_next: true }) => {
                known.push(arg);
                if let Some(value) = args.next() {
                    known.push(value);
                }
            }
            Some(Recognised { claims_next: false }) => known.push(arg),
            None => passthrough.push(arg),
        }
    }

    (known, passthrough)
}

struct Recognised {
    claims_next: bool,
}

fn lookup(command: &Command, token: &str) -> Option<Recognised> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, attached) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        command
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))
            .map(|arg| Recognised {
                claims_next: arg.get_action().takes_values() && !attached,
            })
    } else if let Some(short) = token.strip_prefix('-') {
        let mut chars = short.chars();
        let flag = chars.next()?;
        let attached = chars.next().is_some();
        command
            .get_arguments()
            .find(|arg| arg.get_short() == Some(flag))
            .filter(|arg| !attached || arg.get_action().takes_values())
            .map(|arg| Recognised {
                claims_next: arg.get_action().takes_values() && !attached,
            })
    } else {
        None
    }
}
