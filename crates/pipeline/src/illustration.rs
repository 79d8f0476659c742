//! Illustration generation: story in, up to three illustrations out.
//!
//! Step A asks the text model for numbered scene prompts. Step B issues one
//! image request per scene concurrently and joins on all of them. A scene
//! whose image fails for any reason gets a placeholder; only a failure of
//! step A fails the whole call.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use serde::Serialize;
use storybook_core::error::CoreError;
use storybook_core::illustration::{
    caption, enhance_prompt, placeholder_reference, Illustration, IMAGE_QUALITY, IMAGE_SIZE,
};
use storybook_core::scene::{
    build_scene_prompt_request, extract_scene_prompts, validate_story, ScenePrompt,
    ILLUSTRATION_GENERATION_FAILED, MAX_SCENES,
};
use storybook_genai::{ImageGeneration, ImageRequest, TextCompletion};

use crate::upstream::{with_deadline, UpstreamError};

/// Why a single scene fell back to its placeholder.
#[derive(Debug, thiserror::Error)]
enum ImageFailure {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("image model returned no image reference")]
    MissingReference,
}

/// Result of the illustration stage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IllustrationSet {
    /// One entry per scene prompt, ordered by sequence.
    pub images: Vec<Illustration>,
    /// The scene prompts that were illustrated.
    pub scene_prompts: Vec<String>,
}

/// Derives scene prompts from a story and renders one image per scene.
pub struct IllustrationGenerator {
    text: Option<Arc<dyn TextCompletion>>,
    images: Option<Arc<dyn ImageGeneration>>,
    upstream_timeout: Duration,
}

impl IllustrationGenerator {
    pub fn new(
        text: Option<Arc<dyn TextCompletion>>,
        images: Option<Arc<dyn ImageGeneration>>,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            text,
            images,
            upstream_timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.text.is_some() && self.images.is_some()
    }

    /// Illustrate `story`.
    ///
    /// Never fails because of an individual image; see the module docs.
    pub async fn generate(&self, story: &str) -> Result<IllustrationSet, CoreError> {
        let (text, images) = self.clients()?;
        validate_story(story)?;

        let mut scenes = self.extract_scenes(&**text, story).await?;
        if scenes.len() < MAX_SCENES {
            tracing::warn!(
                found = scenes.len(),
                expected = MAX_SCENES,
                "Text model returned fewer scene prompts than requested"
            );
        }
        scenes.truncate(MAX_SCENES);

        let started = Instant::now();
        let illustrations = join_all(
            scenes
                .iter()
                .enumerate()
                .map(|(index, scene)| self.illustrate(&**images, index + 1, scene)),
        )
        .await;

        let placeholders = illustrations.iter().filter(|i| i.is_placeholder()).count();
        tracing::info!(
            scenes = illustrations.len(),
            placeholders,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generated illustrations"
        );

        Ok(IllustrationSet {
            images: illustrations,
            scene_prompts: scenes.into_iter().map(ScenePrompt::into_string).collect(),
        })
    }

    fn clients(&self) -> Result<(&Arc<dyn TextCompletion>, &Arc<dyn ImageGeneration>), CoreError> {
        let Some(text) = self.text.as_ref() else {
            tracing::error!("Illustrations requested but GEMINI_API_KEY is not configured");
            return Err(CoreError::Configuration(
                "text model credential is not configured".to_string(),
            ));
        };
        let Some(images) = self.images.as_ref() else {
            tracing::error!("Illustrations requested but OPENAI_API_KEY is not configured");
            return Err(CoreError::Configuration(
                "image model credential is not configured".to_string(),
            ));
        };
        Ok((text, images))
    }

    /// Step A: one text completion, parsed into scene prompts.
    async fn extract_scenes(
        &self,
        text: &dyn TextCompletion,
        story: &str,
    ) -> Result<Vec<ScenePrompt>, CoreError> {
        let request = build_scene_prompt_request(story);
        match with_deadline(self.upstream_timeout, text.complete(&request)).await {
            Ok(response) => Ok(extract_scene_prompts(&response)),
            Err(err) => {
                tracing::error!(error = %err, "Scene prompt extraction failed");
                Err(CoreError::Generation(
                    ILLUSTRATION_GENERATION_FAILED.to_string(),
                ))
            }
        }
    }

    /// Step B for one scene. Always yields an illustration.
    async fn illustrate(
        &self,
        images: &dyn ImageGeneration,
        sequence: usize,
        scene: &ScenePrompt,
    ) -> Illustration {
        let prompt = enhance_prompt(scene.as_str());

        let url = match self.request_image(images, &prompt).await {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(sequence, error = %err, "Image generation failed, using placeholder");
                placeholder_reference(sequence)
            }
        };

        Illustration {
            sequence,
            caption: caption(sequence, scene.as_str()),
            prompt,
            url,
        }
    }

    async fn request_image(
        &self,
        images: &dyn ImageGeneration,
        prompt: &str,
    ) -> Result<String, ImageFailure> {
        let request = ImageRequest {
            prompt: prompt.to_string(),
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
            count: 1,
        };

        let generated = with_deadline(self.upstream_timeout, images.generate(&request)).await?;
        let image = generated
            .into_iter()
            .next()
            .ok_or(ImageFailure::MissingReference)?;
        if let Some(revised) = &image.revised_prompt {
            tracing::debug!(revised_prompt = %revised, "Image model revised the prompt");
        }
        image
            .url
            .filter(|url| !url.is_empty())
            .ok_or(ImageFailure::MissingReference)
    }
}
