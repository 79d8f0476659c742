//! The two-stage storybook pipeline.
//!
//! [`StoryGenerator`] turns story elements into prose with one text
//! completion. [`IllustrationGenerator`] derives up to three scene prompts
//! from that prose and fans out one image request per scene, substituting
//! a placeholder for any scene whose image fails.

pub mod illustration;
pub mod story;
pub mod upstream;

#[cfg(test)]
mod fakes;

use std::sync::Arc;
use std::time::Duration;

use storybook_genai::{
    http, GeminiClient, GenAiConfig, GenAiError, ImageGeneration, OpenAiImageClient,
    TextCompletion,
};

pub use illustration::{IllustrationGenerator, IllustrationSet};
pub use story::StoryGenerator;

/// Both generators wired to the same upstream handles.
#[derive(Clone)]
pub struct Pipeline {
    pub story: Arc<StoryGenerator>,
    pub illustrations: Arc<IllustrationGenerator>,
}

impl Pipeline {
    /// Build the pipeline from injected upstream clients.
    ///
    /// A `None` client means the matching credential is not configured;
    /// requests that need it fail with a configuration error.
    pub fn new(
        text: Option<Arc<dyn TextCompletion>>,
        images: Option<Arc<dyn ImageGeneration>>,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            story: Arc::new(StoryGenerator::new(text.clone(), upstream_timeout)),
            illustrations: Arc::new(IllustrationGenerator::new(text, images, upstream_timeout)),
        }
    }

    /// Build the production pipeline (Gemini text, OpenAI images) from config.
    ///
    /// Both clients share one pooled HTTP client.
    pub fn from_config(config: &GenAiConfig) -> Result<Self, GenAiError> {
        let client = http::build_client(config.upstream_timeout)?;

        let text = config.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiClient::with_client(
                client.clone(),
                config.gemini_api_base.clone(),
                config.gemini_model.clone(),
                key.clone(),
            )) as Arc<dyn TextCompletion>
        });

        let images = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiImageClient::with_client(
                client.clone(),
                config.openai_api_base.clone(),
                config.openai_image_model.clone(),
                key.clone(),
            )) as Arc<dyn ImageGeneration>
        });

        Ok(Self::new(text, images, config.upstream_timeout))
    }

    /// Whether story requests can reach an upstream model.
    pub fn story_ready(&self) -> bool {
        self.story.is_configured()
    }

    /// Whether illustration requests can reach both upstream models.
    pub fn illustrations_ready(&self) -> bool {
        self.illustrations.is_configured()
    }
}
