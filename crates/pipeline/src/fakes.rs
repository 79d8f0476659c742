//! In-memory upstream clients for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use storybook_genai::{GenAiError, GeneratedImage, ImageGeneration, ImageRequest, TextCompletion};
use tokio::sync::Barrier;

/// Text model that answers every prompt with the same scripted reply.
pub struct ScriptedText {
    reply: Option<String>,
    delay: Duration,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedText {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an upstream 500.
    pub fn failing() -> Self {
        Self {
            reply: None,
            ..Self::replying("")
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for ScriptedText {
    async fn complete(&self, prompt: &str) -> Result<String, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.reply.clone().ok_or_else(|| GenAiError::Api {
            status: 500,
            body: "internal upstream failure".to_string(),
        })
    }
}

/// Scripted behaviour of one image request.
#[derive(Clone)]
pub enum ImageOutcome {
    Url(&'static str),
    UrlAfter(&'static str, Duration),
    Fail,
    NoUrl,
    /// Never answers within any reasonable deadline.
    Hang,
    /// Waits until every other request holding the barrier has arrived.
    UrlAtBarrier(&'static str, Arc<Barrier>),
}

/// Image model whose answer depends on which scene text the prompt contains.
pub struct ScriptedImages {
    script: Vec<(&'static str, ImageOutcome)>,
    calls: AtomicUsize,
    completed: Mutex<Vec<&'static str>>,
}

impl ScriptedImages {
    pub fn new(script: Vec<(&'static str, ImageOutcome)>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Scene needles in the order their requests finished.
    pub fn completion_order(&self) -> Vec<&'static str> {
        self.completed.lock().unwrap().clone()
    }
}

fn image(url: &str) -> Vec<GeneratedImage> {
    vec![GeneratedImage {
        url: Some(url.to_string()),
        revised_prompt: None,
    }]
}

#[async_trait]
impl ImageGeneration for ScriptedImages {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GeneratedImage>, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (needle, outcome) = self
            .script
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle))
            .cloned()
            .expect("prompt matches a scripted scene");

        let result = match outcome {
            ImageOutcome::Url(url) => Ok(image(url)),
            ImageOutcome::UrlAfter(url, delay) => {
                tokio::time::sleep(delay).await;
                Ok(image(url))
            }
            ImageOutcome::Fail => Err(GenAiError::Api {
                status: 400,
                body: "content_policy_violation".to_string(),
            }),
            ImageOutcome::NoUrl => Ok(vec![GeneratedImage::default()]),
            ImageOutcome::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
            ImageOutcome::UrlAtBarrier(url, barrier) => {
                barrier.wait().await;
                Ok(image(url))
            }
        };

        self.completed.lock().unwrap().push(needle);
        result
    }
}
