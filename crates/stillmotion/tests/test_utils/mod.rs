//! Test doubles shared by the stillmotion integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use stillmotion::{
    JobRunner, PromptDriver, RewriteError, RewriteErrorKind, StillmotionResult, VideoInvocation,
    Vision,
};
use stillmotion_core::{GenerateRequest, GenerateResponse, Output};

/// How the mock driver answers.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text
    Text(String),
    /// Fail with this error
    Fail(RewriteErrorKind),
}

/// Vision driver with a shared call counter.
///
/// The pipeline takes ownership of the boxed driver, so the counter lives
/// behind an `Arc` the test keeps a handle to.
#[derive(Debug, Clone)]
pub struct MockVision {
    reply: MockReply,
    calls: Arc<AtomicUsize>,
}

impl MockVision {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn answering(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }

    pub fn failing(kind: RewriteErrorKind) -> Self {
        Self::new(MockReply::Fail(kind))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn boxed(&self) -> Box<dyn Vision> {
        Box::new(self.clone())
    }
}

#[async_trait]
impl PromptDriver for MockVision {
    async fn generate(&self, _req: &GenerateRequest) -> StillmotionResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            MockReply::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            MockReply::Fail(kind) => Err(RewriteError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}

impl Vision for MockVision {}

/// Job runner that records invocations instead of spawning anything.
#[derive(Debug)]
pub struct RecordingRunner {
    exit_code: i32,
    invocations: Mutex<Vec<VideoInvocation>>,
}

impl RecordingRunner {
    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<VideoInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRunner for RecordingRunner {
    async fn run(&self, invocation: &VideoInvocation) -> StillmotionResult<i32> {
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(self.exit_code)
    }
}

pub const TRACE: &str = "\
The user wants a calm coastal scene.
I will favour a low angle and stormy light.
--- END OF REASONING ---
A lighthouse on a cliff
Generating image with prompt: A lighthouse on a cliff during a thunderstorm, low angle
";

pub const ORIGINAL_PROMPT: &str = "A lighthouse on a cliff during a thunderstorm, low angle";

/// Writes a PNG stub and a trace file into `dir`, returning their paths.
pub fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let image = dir.join("generated_image.png");
    let text = dir.join("prompt+reasoning.txt");
    std::fs::write(&image, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();
    std::fs::write(&text, TRACE).unwrap();
    (image, text)
}
